use std::fmt;

use mojang_client::{MojangError, UpstreamReply};

/// Errors from the resolution pipeline
#[derive(Debug)]
pub enum ResolveError {
    /// Non-success Mojang response, to be relayed verbatim
    Upstream(Box<UpstreamReply>),
    /// Transport failure before Mojang answered
    Http(reqwest::Error),
    /// Mojang reported success but the body did not parse
    Shape(reqwest::Error),
    /// Profile arrived without any properties to decode
    EmptyProfile,
    /// The texture property did not decode as base64 JSON
    TexturePayload(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream(reply) => write!(f, "Upstream returned status {}", reply.status),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Shape(e) => write!(f, "Malformed upstream body: {e}"),
            Self::EmptyProfile => write!(f, "Profile has no properties"),
            Self::TexturePayload(msg) => write!(f, "Invalid texture payload: {msg}"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) | Self::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MojangError> for ResolveError {
    fn from(err: MojangError) -> Self {
        match err {
            MojangError::Status(reply) => Self::Upstream(reply),
            MojangError::Http(e) => Self::Http(e),
            MojangError::Parse(e) => Self::Shape(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
