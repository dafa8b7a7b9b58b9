//! MarketPulse Server - headline sentiment over HTTP
//!
//! Serves per-ticker sentiment analysis built from recent financial-news
//! headlines, with request-level caching and multi-source fallback.
//!
//! # Usage
//! ```sh
//! SERVER_PORT=8000 NEWS_SOURCES=google,yahoo cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `SERVER_HOST` / `SERVER_PORT` - bind address (default: 0.0.0.0:8000)
//! - `WEB_ORIGIN` - browser origin allowed by CORS
//! - `NEWS_SOURCES` - headline sources in priority order (default: google,yahoo)
//! - `CACHE_TTL_SECS` - cache lifetime in seconds (default: 60)
//! - `CACHE_SWEEP_INTERVAL_SECS` - expired-entry sweep period, 0 disables (default: 300)

use anyhow::{Context, Result};
use marketpulse::application::AnalysisService;
use marketpulse::config::Config;
use marketpulse::infrastructure::SourceFactory;
use marketpulse::infrastructure::observability::Metrics;
use marketpulse::interfaces::http::{AppState, create_app};
use std::sync::Arc;
use std::time::Duration;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("MarketPulse Server {} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Sources={:?}, CacheTTL={}s, MaxEntries={}",
        config.news.sources, config.cache.ttl_secs, config.cache.max_entries
    );

    let metrics = Metrics::new().context("Failed to register metrics")?;
    let sources = SourceFactory::create_sources(&config.news)?;
    let service = Arc::new(AnalysisService::from_config(
        sources,
        &config.cache,
        metrics,
    ));

    if let Some(interval) = config.cache.sweep_interval() {
        spawn_cache_sweeper(service.clone(), interval);
        info!("Cache sweeper started (interval: {}s)", interval.as_secs());
    } else {
        info!("Cache sweeper disabled.");
    }

    let app = create_app(AppState::new(service), &config.server.allowed_origins());

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}. Press Ctrl+C to shutdown.", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutdown complete.");
    Ok(())
}

fn spawn_cache_sweeper(service: Arc<AnalysisService>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // First tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let purged = service.purge_expired().await;
            if purged > 0 {
                debug!("Cache sweeper: purged {} expired entries", purged);
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received. Draining connections...");
}
