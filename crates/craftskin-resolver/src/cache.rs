//! Two-namespace TTL cache for resolved identities and profiles

use std::time::Duration;

use moka::future::Cache;

use crate::types::{CacheStats, SkinProfile};

/// Entries live for 24 hours from write in both namespaces
pub const DEFAULT_TTL_SECS: u64 = 86400;
const DEFAULT_CAPACITY: u64 = 10_000;

/// Cache with separate username→UUID and UUID→profile namespaces.
///
/// Constructed by the caller and handed to the resolver, never ambient
/// state. Reads of an expired entry behave as misses; writes overwrite
/// whatever is present.
pub struct SkinCache {
    uuids: Cache<String, String>,
    profiles: Cache<String, SkinProfile>,
}

impl SkinCache {
    /// Create a cache with the standard 24-hour TTL
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(DEFAULT_TTL_SECS))
    }

    /// Create a cache with a custom TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        let uuids = Cache::builder()
            .max_capacity(DEFAULT_CAPACITY)
            .time_to_live(ttl)
            .build();

        let profiles = Cache::builder()
            .max_capacity(DEFAULT_CAPACITY)
            .time_to_live(ttl)
            .build();

        Self { uuids, profiles }
    }

    /// Cached UUID for a username, if fresh
    pub async fn get_uuid(&self, username: &str) -> Option<String> {
        self.uuids.get(username).await
    }

    pub async fn put_uuid(&self, username: &str, uuid: &str) {
        self.uuids
            .insert(username.to_string(), uuid.to_string())
            .await;
    }

    /// Cached profile for a UUID string, if fresh.
    ///
    /// The key is the exact textual form used at write time; compact and
    /// hyphenated forms of the same UUID are distinct keys.
    pub async fn get_profile(&self, uuid: &str) -> Option<SkinProfile> {
        self.profiles.get(uuid).await
    }

    pub async fn put_profile(&self, uuid: &str, profile: SkinProfile) {
        self.profiles.insert(uuid.to_string(), profile).await;
    }

    /// Entry counts for the health endpoint
    pub async fn stats(&self) -> CacheStats {
        self.uuids.run_pending_tasks().await;
        self.profiles.run_pending_tasks().await;

        CacheStats {
            uuids: self.uuids.entry_count(),
            profiles: self.profiles.entry_count(),
        }
    }
}

impl Default for SkinCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::types::SkinProperty;

    fn sample_profile() -> SkinProfile {
        SkinProfile {
            id: "069a79f444e94726a5befca90e38aaf5".to_string(),
            name: "Notch".to_string(),
            properties: vec![SkinProperty {
                name: "textures".to_string(),
                value: json!({"SKIN": {"url": "http://textures.minecraft.net/texture/abc"}}),
            }],
        }
    }

    #[tokio::test]
    async fn test_uuid_namespace_roundtrip() {
        let cache = SkinCache::new();

        assert!(cache.get_uuid("Notch").await.is_none());
        cache
            .put_uuid("Notch", "069a79f444e94726a5befca90e38aaf5")
            .await;
        assert_eq!(
            cache.get_uuid("Notch").await.as_deref(),
            Some("069a79f444e94726a5befca90e38aaf5")
        );
    }

    #[tokio::test]
    async fn test_profile_namespace_roundtrip() {
        let cache = SkinCache::new();
        let profile = sample_profile();

        cache.put_profile(&profile.id, profile.clone()).await;
        assert_eq!(cache.get_profile(&profile.id).await, Some(profile));
    }

    #[tokio::test]
    async fn test_namespaces_are_separate() {
        let cache = SkinCache::new();
        let key = "069a79f444e94726a5befca90e38aaf5";

        cache.put_uuid(key, key).await;
        assert!(cache.get_profile(key).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_miss() {
        let cache = SkinCache::with_ttl(Duration::from_millis(20));

        cache
            .put_uuid("Notch", "069a79f444e94726a5befca90e38aaf5")
            .await;
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(cache.get_uuid("Notch").await.is_none());
    }

    #[tokio::test]
    async fn test_stats_counts_both_namespaces() {
        let cache = SkinCache::new();
        let profile = sample_profile();

        let uuid = profile.id.clone();
        cache.put_uuid("Notch", &uuid).await;
        cache.put_profile(&uuid, profile).await;

        let stats = cache.stats().await;
        assert_eq!(stats.uuids, 1);
        assert_eq!(stats.profiles, 1);
    }
}
