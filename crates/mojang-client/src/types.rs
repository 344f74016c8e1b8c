use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

/// Response from the username lookup endpoint.
///
/// The `id` is the UUID in compact form, exactly as Mojang returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct NameLookup {
    pub id: String,
    pub name: String,
}

/// Session profile as returned by the session server, textures still encoded
#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
}

/// A profile property; `value` is base64-encoded JSON
#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    pub name: String,
    pub value: String,
    /// Only present when the profile is requested with `unsigned=false`
    pub signature: Option<String>,
}

/// A non-success upstream response, captured for verbatim relay
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}
