//! Core types for the Craftskin proxy

use craftskin_resolver::cache::DEFAULT_TTL_SECS;
use craftskin_resolver::CacheStats;
use serde::Serialize;

/// Configuration for the proxy
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub port: u16,
    pub api_url: String,
    pub session_url: String,
    pub cache_ttl_secs: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            port: 3002,
            api_url: "https://api.mojang.com".to_string(),
            session_url: "https://sessionserver.mojang.com".to_string(),
            cache_ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub cache: CacheStats,
}
