//! Development-only routes serving media and static files from disk.
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    routing::get,
    Router,
};

use crate::{
    services::media::{self, FileMount},
    state::AppState,
    utils::httperror::HttpError,
};

/// Create a router serving every file below the mount's document root.
pub fn create_router(mount: FileMount) -> Router<AppState> {
    Router::new()
        .route(&mount.route_path(), get(serve_mounted_file))
        .with_state(Arc::new(mount))
}

/// Serve the file the wildcard segment names, or a JSON error.
async fn serve_mounted_file(
    State(mount): State<Arc<FileMount>>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    Ok(media::serve_file(&mount, &path, &headers).await?)
}
