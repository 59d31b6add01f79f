//! # tenderhub
//!
//! Axum host for the Tender-Hub client: server-renders the Leptos app and
//! serves the hydrate bundle.

mod config;
mod routes;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::HostConfig;
use crate::routes::ServeError;

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tenderhub=info,client=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HostConfig::from_env()?;
    let app = routes::app(&config).inspect_err(|e| tracing::error!(error = %e, "router setup failed"))?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, site_root = %config.site_root.display(), "tenderhub listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
