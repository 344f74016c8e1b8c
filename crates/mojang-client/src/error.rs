use std::fmt;

use crate::types::UpstreamReply;

/// Errors from the Mojang client
#[derive(Debug)]
pub enum MojangError {
    /// Transport failure before Mojang answered
    Http(reqwest::Error),
    /// Non-success response, captured for verbatim relay
    Status(Box<UpstreamReply>),
    /// Success status but the body did not parse
    Parse(reqwest::Error),
}

impl fmt::Display for MojangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status(reply) => write!(f, "Upstream returned status {}", reply.status),
            Self::Parse(e) => write!(f, "Failed to parse upstream response: {e}"),
        }
    }
}

impl std::error::Error for MojangError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) | Self::Parse(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for MojangError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, MojangError>;
