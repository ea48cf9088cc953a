use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{PropertyDraft, PropertyId, PropertyPatch};
use super::media::MediaUpload;
use super::repository::{PropertyRepository, RepositoryError};
use super::service::{CatalogService, CatalogServiceError};

/// Router builder exposing the broker's catalog editor endpoints.
pub fn catalog_router<R>(service: Arc<CatalogService<R>>) -> Router
where
    R: PropertyRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/catalog/properties",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            "/api/v1/catalog/properties/:property_id",
            get(fetch_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route("/api/v1/catalog/import", post(import_handler::<R>))
        .route("/api/v1/catalog/media", post(media_handler::<R>))
        .with_state(service)
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<CatalogService<R>>>) -> Response
where
    R: PropertyRepository + 'static,
{
    match service.list() {
        Ok(properties) => (StatusCode::OK, Json(properties)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Json(draft): Json<PropertyDraft>,
) -> Response
where
    R: PropertyRepository + 'static,
{
    match service.add(draft) {
        Ok(property) => (StatusCode::CREATED, Json(property)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(property_id): Path<String>,
) -> Response
where
    R: PropertyRepository + 'static,
{
    match service.get(&PropertyId(property_id)) {
        Ok(property) => (StatusCode::OK, Json(property)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(property_id): Path<String>,
    Json(patch): Json<PropertyPatch>,
) -> Response
where
    R: PropertyRepository + 'static,
{
    match service.update(&PropertyId(property_id), patch) {
        Ok(property) => (StatusCode::OK, Json(property)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(property_id): Path<String>,
) -> Response
where
    R: PropertyRepository + 'static,
{
    match service.delete(&PropertyId(property_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn import_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    body: String,
) -> Response
where
    R: PropertyRepository + 'static,
{
    match service.import_csv(Cursor::new(body.into_bytes())) {
        Ok(created) => (
            StatusCode::CREATED,
            Json(json!({ "imported": created.len(), "properties": created })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn media_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Json(upload): Json<MediaUpload>,
) -> Response
where
    R: PropertyRepository + 'static,
{
    match service.prepare_upload(&upload) {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: CatalogServiceError) -> Response {
    let status = match &err {
        CatalogServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        CatalogServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        CatalogServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        CatalogServiceError::Import(_) | CatalogServiceError::Media(_) => StatusCode::BAD_REQUEST,
    };

    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
