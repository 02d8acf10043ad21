//! Routes for the product catalogue.
use axum::{routing::get, Json, Router};

use crate::state::AppState;

/// Create a router for routes under the product service.
pub fn create_router() -> Router<AppState> {
    Router::new().route("/", get(root))
}

/// Simply a healthcheck that this component is functional.
async fn root() -> Json<String> {
    Json("Products service is running".to_owned())
}
