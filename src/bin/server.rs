//! Lost-and-found locator service
//!
//! Serves the matching API and the static frontend. Bind address comes from
//! `LISTEN_ADDR` (default `0.0.0.0:8080`).

use lostfound_core::catalog::Catalog;
use lostfound_core::extractor::ItemExtractor;
use lostfound_core::http::{build_router, AppState};
use lostfound_core::matcher::SpotMatcher;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lostfound_core=info,tower_http=info")),
        )
        .init();

    let state = AppState::new(ItemExtractor::new(), SpotMatcher::new(Catalog::builtin()));
    let app = build_router(state);

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
