//! HTTP server for the skin proxy endpoints
//!
//! Provides /health and /user/{identifier}.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use craftskin_resolver::{ResolveError, Resolution, SkinResolver};
use mojang_client::UpstreamReply;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::types::HealthResponse;

const JSON_CONTENT_TYPE: &str = "Application/Json";

/// Shared state for the HTTP server
pub struct ServerState {
    pub resolver: SkinResolver,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(resolver: SkinResolver) -> Self {
        Self {
            resolver,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/user/{identifier}", get(get_user))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let cache = state.resolver.cache().stats().await;
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        cache,
    })
}

/// Resolve an identifier to its decoded skin profile
async fn get_user(State(state): State<SharedState>, Path(identifier): Path<String>) -> Response {
    match state.resolver.resolve(&identifier).await {
        Ok(resolution) => profile_response(resolution),
        Err(ResolveError::Upstream(reply)) => {
            info!(identifier = %identifier, status = %reply.status, "Relaying upstream response");
            relay_upstream(*reply)
        }
        Err(ResolveError::Http(e)) => {
            warn!(identifier = %identifier, error = %e, "Mojang unreachable");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Upstream unreachable" })),
            )
                .into_response()
        }
        Err(e) => {
            warn!(identifier = %identifier, error = %e, "Unresolvable profile");
            unresolvable_response()
        }
    }
}

/// 200 with the serialized profile and cache provenance
fn profile_response(resolution: Resolution) -> Response {
    let body = match serde_json::to_vec(&resolution.profile) {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "Failed to serialize profile");
            return unresolvable_response();
        }
    };
    let cache_header = if resolution.cached { "HIT" } else { "MISS" };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header("X-Cache", cache_header)
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Terminal failure for a profile that would not resolve or decode
fn unresolvable_response() -> Response {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(Body::from("Error"))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Relay a non-success upstream response unchanged.
///
/// Connection, Transfer-Encoding and Content-Length describe the upstream
/// hop's transport; ours sets its own.
fn relay_upstream(reply: UpstreamReply) -> Response {
    let mut builder = Response::builder().status(reply.status);

    if let Some(headers) = builder.headers_mut() {
        for (name, value) in reply.headers.iter() {
            if matches!(
                name.as_str(),
                "connection" | "transfer-encoding" | "content-length"
            ) {
                continue;
            }
            headers.append(name.clone(), value.clone());
        }
    }

    builder
        .body(Body::from(reply.body))
        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
}
