use crate::server;
use crate::simulate::{run_simulation, SimulateArgs};
use casa_lead::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Casa Lead",
    about = "Run the home-financing simulator as a web service or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Simulate financing for one lead and print matching listings
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Simulate(args) => run_simulation(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["casa-lead"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn simulate_accepts_target_and_margin() {
        let cli = Cli::try_parse_from([
            "casa-lead",
            "simulate",
            "--income",
            "2500",
            "--property-value",
            "180000",
            "--margin-factor",
            "1.2",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Simulate(args)) => {
                assert_eq!(args.income, 2500.0);
                assert_eq!(args.property_value, Some(180_000.0));
                assert_eq!(args.margin_factor, Some(1.2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn simulate_rejects_shrinking_margin() {
        let parsed = Cli::try_parse_from([
            "casa-lead",
            "simulate",
            "--income",
            "2500",
            "--margin-factor",
            "0.8",
        ]);
        assert!(parsed.is_err());
    }
}
