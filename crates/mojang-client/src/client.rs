use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{MojangError, Result};
use crate::types::{NameLookup, RawProfile, UpstreamReply};

const DEFAULT_API_URL: &str = "https://api.mojang.com";
const DEFAULT_SESSION_URL: &str = "https://sessionserver.mojang.com";

/// Client for the Mojang identity endpoints
pub struct MojangClient {
    client: Client,
    api_url: String,
    session_url: String,
}

impl MojangClient {
    /// Create a new client against the public Mojang endpoints
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_API_URL, DEFAULT_SESSION_URL)
    }

    /// Create a new client with custom endpoint base URLs
    pub fn with_base_urls(api_url: &str, session_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            session_url: session_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up the UUID for a username
    pub async fn lookup_uuid(&self, username: &str) -> Result<NameLookup> {
        let url = format!("{}/users/profiles/minecraft/{}", self.api_url, username);
        debug!(username, url = %url, "Looking up UUID");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(MojangError::Status(Box::new(capture_reply(response).await?)));
        }

        response
            .json::<NameLookup>()
            .await
            .map_err(MojangError::Parse)
    }

    /// Fetch the session profile for a UUID (compact or hyphenated form)
    pub async fn fetch_profile(&self, uuid: &str) -> Result<RawProfile> {
        let url = format!("{}/session/minecraft/profile/{}", self.session_url, uuid);
        debug!(uuid, url = %url, "Fetching session profile");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(MojangError::Status(Box::new(capture_reply(response).await?)));
        }

        response
            .json::<RawProfile>()
            .await
            .map_err(MojangError::Parse)
    }
}

impl Default for MojangClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Capture status, headers, and body of a non-success response
async fn capture_reply(response: reqwest::Response) -> Result<UpstreamReply> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();

    Ok(UpstreamReply {
        status,
        headers,
        body,
    })
}
