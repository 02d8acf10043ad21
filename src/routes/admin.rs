//! Read-only admin index routes, shared by both admin mounts.
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    services::admin::{AdminSection, AdminSite},
    state::AppState,
    utils::httperror::HttpError,
};

/// Create a router serving the given admin site.
pub fn create_router(site: Arc<AdminSite>) -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{section}", get(section))
        .with_state(site)
}

/// The site's index: its header and every section.
async fn index(State(site): State<Arc<AdminSite>>) -> Json<AdminSite> {
    Json(site.as_ref().clone())
}

/// A single section of the site.
async fn section(
    State(site): State<Arc<AdminSite>>,
    Path(slug): Path<String>,
) -> Result<Json<AdminSection>, HttpError> {
    site.section(&slug).cloned().map(Json).ok_or_else(|| {
        HttpError::new(
            StatusCode::NOT_FOUND,
            Some(format!("No admin section named {slug}")),
        )
    })
}
