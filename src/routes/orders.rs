//! Routes for handling order creation and access.
use axum::{routing::get, Json, Router};

use crate::state::AppState;

/// Create a router for routes under the order service.
pub fn create_router() -> Router<AppState> {
    Router::new().route("/", get(root))
}

/// Simply a healthcheck that this component is functional.
async fn root() -> Json<String> {
    Json("Orders service is running".to_owned())
}
