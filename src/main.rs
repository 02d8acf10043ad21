//! # buyitme-api
//!
//! URL routing front door of the BuyItMe ecommerce backend. Mounts the two
//! admin interfaces and the `/api` feature namespaces, and in development
//! mode serves uploaded media and static assets straight from disk.
mod config;
mod constants;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Context as _;
use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{config::Settings, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = Settings::from_env().context("failed to load configuration")?;
    if settings.debug {
        warn!("development mode enabled; media and static files are served by this process");
    }
    let listen_address = settings.listen_address;
    let app = routes::app(AppState::new(settings));

    let listener = TcpListener::bind(listen_address)
        .await
        .with_context(|| format!("failed to bind listener on {listen_address}"))?;
    info!(bind = %listen_address, "buyitme-api listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = %err, "failed to listen for shutdown signal");
            }
            info!("shutting down gracefully");
        })
        .await
        .context("failed to run Axum service")
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
