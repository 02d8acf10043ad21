//! API routes within the application. The root router declared here mounts
//! the admin interfaces and the /api namespace, plus the media and static
//! file mounts when running in development mode.
use std::sync::Arc;

use axum::{http::header::HeaderName, Router};
use tower_http::{
    normalize_path::NormalizePath,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{state::AppState, utils::httperror::not_found};

pub mod admin;
pub mod api;
pub mod auth;
pub mod cart;
pub mod files;
pub mod orders;
pub mod products;
pub mod wishlists;


/// Header carrying the per-request id.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Top-level prefixes owned by the root router. File mounts may not reuse them.
pub const RESERVED_PREFIXES: [&str; 3] = ["admin", "django-admin", "api"];

/// Create the root router. Mounts are declared in resolution order.
pub fn create_router(state: &AppState) -> Router<AppState> {
    let settings = &state.settings;
    let mut router = Router::new()
        .nest("/admin", admin::create_router(Arc::clone(&state.admin_site)))
        .nest(
            "/django-admin",
            admin::create_router(Arc::clone(&state.fallback_admin_site)),
        )
        .nest("/api", api::create_router());

    if settings.debug {
        for mount in [&settings.media, &settings.static_files] {
            if mount.is_local() {
                info!(
                    url_prefix = %mount.url_prefix,
                    document_root = %mount.document_root.display(),
                    "serving files from disk"
                );
                router = router.merge(files::create_router(mount.clone()));
            } else {
                info!(
                    url_prefix = %mount.url_prefix,
                    "file mount points at another host; not serving it"
                );
            }
        }
    }

    router.fallback(not_found)
}

/// Build the complete application: the root router under the deployment
/// prefix, request ids, request tracing and trailing slash normalisation.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let routes = create_router(&state);
    let prefix = state.settings.uri_prefix.trim_matches('/');
    let routes = if prefix.is_empty() {
        routes
    } else {
        Router::new()
            .nest(&format!("/{prefix}"), routes)
            .fallback(not_found)
    };

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let router = routes
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state);
    NormalizePath::trim_trailing_slash(router)
}
