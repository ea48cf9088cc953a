mod cli;
mod infra;
mod routes;
mod server;
mod simulate;

use casa_lead::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
