//! Routes under /auth handling authentication related mechanisms.
use axum::{routing::get, Json, Router};

use crate::state::AppState;

/// Create a router for the /auth route.
pub fn create_router() -> Router<AppState> {
    Router::new().route("/", get(root))
}

/// Simply a healthcheck that this component is functional.
async fn root() -> Json<String> {
    Json("Auth service is running".to_owned())
}
