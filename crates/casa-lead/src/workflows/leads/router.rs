use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::intake::LeadSubmission;
use super::service::{LeadServiceError, LeadSimulationService};
use crate::workflows::catalog::PropertyRepository;

/// Router builder exposing the visitor-facing simulation endpoint.
pub fn lead_router<R>(service: Arc<LeadSimulationService<R>>) -> Router
where
    R: PropertyRepository + 'static,
{
    Router::new()
        .route("/api/v1/simulations", post(simulate_handler::<R>))
        .with_state(service)
}

pub(crate) async fn simulate_handler<R>(
    State(service): State<Arc<LeadSimulationService<R>>>,
    Json(submission): Json<LeadSubmission>,
) -> Response
where
    R: PropertyRepository + 'static,
{
    match service.simulate(submission) {
        Ok(simulation) => (StatusCode::OK, Json(simulation)).into_response(),
        Err(LeadServiceError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
