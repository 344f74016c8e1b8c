//! Texture payload decoding

use base64::{engine::general_purpose, Engine};
use mojang_client::RawProfile;

use crate::error::{ResolveError, Result};
use crate::types::{SkinProfile, SkinProperty};

pub const TEXTURES_PROPERTY: &str = "textures";

/// Decode the texture payload embedded in a raw session profile.
///
/// The session server carries texture URLs as base64-encoded JSON in the
/// first profile property. A profile without properties, or whose payload
/// does not decode, is unresolvable rather than passed along half-built.
pub fn decode_profile(raw: RawProfile) -> Result<SkinProfile> {
    let property = raw
        .properties
        .into_iter()
        .next()
        .ok_or(ResolveError::EmptyProfile)?;

    let bytes = general_purpose::STANDARD
        .decode(&property.value)
        .map_err(|e| ResolveError::TexturePayload(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ResolveError::TexturePayload(e.to_string()))?;

    Ok(SkinProfile {
        id: raw.id,
        name: raw.name,
        properties: vec![SkinProperty {
            name: TEXTURES_PROPERTY.to_string(),
            value,
        }],
    })
}
