//! The resolution pipeline: identifier → UUID → decoded profile

use mojang_client::MojangClient;
use tracing::debug;

use crate::cache::SkinCache;
use crate::error::Result;
use crate::identifier::{classify, hyphenate, Identifier};
use crate::textures::decode_profile;
use crate::types::Resolution;

/// Resolves player identifiers to decoded skin profiles.
///
/// Both steps are read-through: cache first, then the Mojang endpoint, then
/// a cache write. Non-success Mojang responses surface unchanged so the
/// caller can relay them; nothing is retried.
pub struct SkinResolver {
    client: MojangClient,
    cache: SkinCache,
}

impl SkinResolver {
    /// Create a resolver around an upstream client and an injected cache
    pub fn new(client: MojangClient, cache: SkinCache) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &SkinCache {
        &self.cache
    }

    /// Resolve a username or UUID to a decoded profile
    pub async fn resolve(&self, identifier: &str) -> Result<Resolution> {
        let uuid = self.resolve_uuid(identifier).await?;
        self.resolve_profile(&uuid).await
    }

    /// Map an identifier to a UUID string.
    ///
    /// UUID-shaped input short-circuits to the hyphenated form without
    /// touching the cache or Mojang. Usernames go through the username
    /// cache and, on a miss, the name lookup endpoint; the UUID then stays
    /// in the compact form Mojang returned it in.
    pub async fn resolve_uuid(&self, identifier: &str) -> Result<String> {
        let username = match classify(identifier) {
            Identifier::Uuid(raw) => return Ok(hyphenate(&raw)),
            Identifier::Username(name) => name,
        };

        if let Some(uuid) = self.cache.get_uuid(&username).await {
            debug!(username = %username, uuid = %uuid, "Username cache hit");
            return Ok(uuid);
        }

        let lookup = self.client.lookup_uuid(&username).await?;
        self.cache.put_uuid(&username, &lookup.id).await;

        Ok(lookup.id)
    }

    /// Fetch and decode the profile for a UUID string.
    ///
    /// The cache key is the UUID exactly as passed; the session server
    /// accepts both textual forms. An empty or undecodable profile behind a
    /// success status is not cached.
    pub async fn resolve_profile(&self, uuid: &str) -> Result<Resolution> {
        if let Some(profile) = self.cache.get_profile(uuid).await {
            debug!(uuid, "Profile cache hit");
            return Ok(Resolution {
                profile,
                cached: true,
            });
        }

        let raw = self.client.fetch_profile(uuid).await?;
        let profile = decode_profile(raw)?;
        self.cache.put_profile(uuid, profile.clone()).await;

        Ok(Resolution {
            profile,
            cached: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::error::ResolveError;
    use crate::types::{SkinProfile, SkinProperty};

    const COMPACT: &str = "069a79f444e94726a5befca90e38aaf5";
    const HYPHENATED: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

    /// Resolver whose client points at a closed port; any upstream call fails
    fn offline_resolver() -> SkinResolver {
        let client = MojangClient::with_base_urls("http://127.0.0.1:1", "http://127.0.0.1:1");
        SkinResolver::new(client, SkinCache::new())
    }

    fn sample_profile() -> SkinProfile {
        SkinProfile {
            id: COMPACT.to_string(),
            name: "Notch".to_string(),
            properties: vec![SkinProperty {
                name: "textures".to_string(),
                value: json!({"SKIN": {"url": "http://textures.minecraft.net/texture/abc"}}),
            }],
        }
    }

    #[tokio::test]
    async fn test_compact_uuid_short_circuits() {
        // No cache entries and no reachable upstream: only the short-circuit
        // path can produce this answer.
        let resolver = offline_resolver();

        let uuid = resolver.resolve_uuid(COMPACT).await.unwrap();
        assert_eq!(uuid, HYPHENATED);
        assert_eq!(resolver.cache().stats().await.uuids, 0);
    }

    #[tokio::test]
    async fn test_hyphenated_uuid_is_idempotent() {
        let resolver = offline_resolver();

        let uuid = resolver.resolve_uuid(HYPHENATED).await.unwrap();
        assert_eq!(uuid, HYPHENATED);
    }

    #[tokio::test]
    async fn test_cached_username_skips_upstream() {
        let resolver = offline_resolver();
        resolver.cache().put_uuid("Notch", COMPACT).await;

        let uuid = resolver.resolve_uuid("Notch").await.unwrap();
        assert_eq!(uuid, COMPACT);
    }

    #[tokio::test]
    async fn test_uncached_username_fails_without_upstream() {
        let resolver = offline_resolver();

        assert!(matches!(
            resolver.resolve_uuid("Notch").await,
            Err(ResolveError::Http(_))
        ));
    }

    #[tokio::test]
    async fn test_cached_profile_skips_upstream() {
        let resolver = offline_resolver();
        resolver.cache().put_profile(COMPACT, sample_profile()).await;

        let resolution = resolver.resolve_profile(COMPACT).await.unwrap();
        assert!(resolution.cached);
        assert_eq!(resolution.profile, sample_profile());
    }

    #[tokio::test]
    async fn test_full_resolution_from_cache() {
        let resolver = offline_resolver();
        resolver.cache().put_uuid("Notch", COMPACT).await;
        resolver.cache().put_profile(COMPACT, sample_profile()).await;

        let resolution = resolver.resolve("Notch").await.unwrap();
        assert!(resolution.cached);
        assert_eq!(resolution.profile.name, "Notch");
    }

    #[tokio::test]
    async fn test_uuid_path_uses_hyphenated_cache_key() {
        let resolver = offline_resolver();
        let mut profile = sample_profile();
        profile.id = HYPHENATED.to_string();
        resolver.cache().put_profile(HYPHENATED, profile).await;

        // Compact input normalizes to the hyphenated key before the lookup
        let resolution = resolver.resolve(COMPACT).await.unwrap();
        assert!(resolution.cached);
        assert_eq!(resolution.profile.id, HYPHENATED);
    }
}
