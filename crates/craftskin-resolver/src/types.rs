use serde::{Deserialize, Serialize};

/// A resolved profile with its texture property decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinProfile {
    pub id: String,
    pub name: String,
    pub properties: Vec<SkinProperty>,
}

/// A decoded profile property; for skins the name is always `textures`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinProperty {
    pub name: String,
    pub value: serde_json::Value,
}

/// Outcome of a successful resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    pub profile: SkinProfile,
    /// Whether the profile came out of the cache rather than upstream
    pub cached: bool,
}

/// Cache entry counts, reported by the health endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub uuids: u64,
    pub profiles: u64,
}
