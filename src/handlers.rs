use crate::catalog::SchemeCatalog;
use crate::errors::AppError;
use crate::models::{Category, Scheme};
use crate::translator::Translator;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only scheme catalog, loaded once at startup.
    pub catalog: Arc<SchemeCatalog>,
    /// Translation provider for non-English replies.
    pub translator: Arc<dyn Translator>,
}

/// Health check endpoint.
///
/// Returns the service status, version, and loaded catalog size.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "scheme-bot-api",
            "version": env!("CARGO_PKG_VERSION"),
            "schemes_loaded": state.catalog.len(),
        })),
    )
}

#[derive(Debug, Deserialize)]
pub struct SchemeListParams {
    /// Optional category filter, e.g. "agriculture".
    pub category: Option<String>,
}

/// GET /api/v1/schemes
///
/// Lists the catalog, optionally filtered by category. Unknown category
/// names are a 400 rather than an empty list so client typos are visible.
pub async fn list_schemes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SchemeListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let schemes: Vec<&Scheme> = match params.category.as_deref() {
        Some(raw) => {
            let category = Category::parse(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Unknown category '{}'", raw))
            })?;
            state
                .catalog
                .schemes()
                .iter()
                .filter(|s| s.category == category)
                .collect()
        }
        None => state.catalog.schemes().iter().collect(),
    };

    Ok(Json(json!({
        "count": schemes.len(),
        "schemes": schemes,
    })))
}

/// GET /api/v1/schemes/:id
pub async fn get_scheme(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Scheme>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No scheme with id '{}'", id)))
}
