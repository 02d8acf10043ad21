//! The /api namespace, partitioned into one sub-router per feature.
use axum::Router;

use super::{auth, cart, orders, products, wishlists};
use crate::state::AppState;

/// Feature namespaces under /api, in declaration order. These prefixes are a
/// public contract; renaming one breaks API consumers.
pub const MOUNTS: [(&str, fn() -> Router<AppState>); 5] = [
    ("/auth", auth::create_router),
    ("/products", products::create_router),
    ("/cart", cart::create_router),
    ("/orders", orders::create_router),
    ("/wishlists", wishlists::create_router),
];

/// Create the router nesting every feature namespace.
pub fn create_router() -> Router<AppState> {
    MOUNTS
        .into_iter()
        .fold(Router::new(), |router, (prefix, create)| {
            router.nest(prefix, create())
        })
}
