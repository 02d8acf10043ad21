//! Defines the state shared across the Axum application.
use std::sync::Arc;

use crate::{config::Settings, services::admin::AdminSite};

#[derive(Clone)]
/// The state struct shared across routers.
pub struct AppState {
    /// Process settings, read-only after start-up.
    pub settings: Arc<Settings>,
    /// The sectioned BuyItMe admin mounted at /admin.
    pub admin_site: Arc<AdminSite>,
    /// The default admin mounted at /django-admin.
    pub fallback_admin_site: Arc<AdminSite>,
}

impl AppState {
    /// Build the state around the given settings, with both admin sites.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            admin_site: Arc::new(AdminSite::buyitme()),
            fallback_admin_site: Arc::new(AdminSite::fallback()),
        }
    }
}
