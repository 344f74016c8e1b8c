//! Craftskin Proxy - caching front for Mojang skin lookups
//!
//! Resolves player identifiers (usernames or UUIDs) to decoded skin
//! profiles, caching both resolution steps to keep Mojang call volume down.

mod error;
mod server;
mod types;

use std::sync::Arc;
use std::time::Duration;

use craftskin_resolver::{SkinCache, SkinResolver};
use mojang_client::MojangClient;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::error::Result;
use crate::server::{start_server, ServerState, SharedState};
use crate::types::ProxyConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("craftskin_proxy=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Craftskin proxy (Rust)...");

    // Load configuration from environment
    let config = load_config();
    info!("Port: {}", config.port);
    info!("Name lookup URL: {}", config.api_url);
    info!("Session server URL: {}", config.session_url);
    info!("Cache TTL: {} seconds", config.cache_ttl_secs);

    // Wire client and cache into the resolver
    let client = MojangClient::with_base_urls(&config.api_url, &config.session_url);
    let cache = SkinCache::with_ttl(Duration::from_secs(config.cache_ttl_secs));
    let resolver = SkinResolver::new(client, cache);

    // Create shared state
    let state: SharedState = Arc::new(ServerState::new(resolver));

    // Start HTTP server (blocking)
    start_server(state, config.port).await?;

    Ok(())
}

fn load_config() -> ProxyConfig {
    let defaults = ProxyConfig::default();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(defaults.port);

    let api_url = std::env::var("MOJANG_API_URL").unwrap_or(defaults.api_url);

    let session_url = std::env::var("MOJANG_SESSION_URL").unwrap_or(defaults.session_url);

    let cache_ttl_secs = std::env::var("CACHE_TTL_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(defaults.cache_ttl_secs);

    ProxyConfig {
        port,
        api_url,
        session_url,
        cache_ttl_secs,
    }
}
