//! Player Skin Resolution
//!
//! Resolves player identifiers (usernames or UUIDs in either textual form)
//! to decoded skin profiles, caching the username→UUID and UUID→profile
//! steps independently with a fixed 24-hour TTL.

pub mod cache;
pub mod error;
pub mod identifier;
pub mod resolver;
pub mod textures;
pub mod types;

pub use cache::SkinCache;
pub use error::{ResolveError, Result};
pub use resolver::SkinResolver;
pub use types::{CacheStats, Resolution, SkinProfile, SkinProperty};
