//! HTTP surface: method routing, CORS, and status mapping.
//!
//! One endpoint, any path. The front-end calls it cross-origin, so every
//! response carries the permissive CORS headers, preflights included.

use crate::config::Config;
use crate::demo;
use crate::whisper::models::{LookupRequest, LookupResult};
use crate::whisper::{CardLookup, WhisperClient};
use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Shared per-process state: configuration plus the upstream client.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: Arc<WhisperClient>,
    lookup: Arc<CardLookup>,
}

impl AppState {
    /// Builds the state, including the reusable upstream HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        let client = WhisperClient::new(&config).context("Failed to create HTTP client")?;

        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
            lookup: Arc::new(CardLookup::new()),
        })
    }
}

/// Rejections surfaced to the caller with a non-200 status.
#[derive(Debug, Error)]
enum RequestError {
    #[error("Card name is required")]
    MissingCardName,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal server error")]
    BadBody(#[source] serde_json::Error),
}

impl RequestError {
    fn status(&self) -> StatusCode {
        match self {
            RequestError::MissingCardName => StatusCode::BAD_REQUEST,
            RequestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::BadBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error payload: `{"error": ..., "message": ...?}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let message = match &self {
            RequestError::BadBody(e) => Some(e.to_string()),
            _ => None,
        };
        let body = ErrorBody { error: self.to_string(), message };

        with_cors((self.status(), Json(body)).into_response())
    }
}

fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type")),
        (header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS")),
    ]
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in cors_headers() {
        headers.insert(name, value);
    }
    response
}

/// Builds the single-endpoint router; the handler is method-routed and
/// answers on any path.
pub fn router(state: AppState) -> Router {
    Router::new().fallback(handle).with_state(state)
}

async fn handle(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    debug!("{} request, {} byte body", method, body.len());

    if method == Method::OPTIONS {
        // CORS preflight
        return with_cors(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        debug!("Rejecting method: {}", method);
        return RequestError::MethodNotAllowed.into_response();
    }

    match lookup_response(&state, &body).await {
        Ok(result) => with_cors((StatusCode::OK, Json(result)).into_response()),
        Err(e) => e.into_response(),
    }
}

async fn lookup_response(state: &AppState, body: &[u8]) -> Result<LookupResult, RequestError> {
    let request: LookupRequest = serde_json::from_slice(body).map_err(RequestError::BadBody)?;

    let card_name = request.card_name.trim();
    if card_name.is_empty() {
        return Err(RequestError::MissingCardName);
    }

    info!("Processing card: {}", card_name);

    if state.config.demo_mode {
        debug!("Demo mode: returning synthetic result");
        return Ok(demo::lookup(&state.config.base_url, card_name));
    }

    Ok(state.lookup.execute(state.client.as_ref(), card_name).await)
}

/// Binds and serves until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let bind = config.bind.clone();
    let demo_mode = config.demo_mode;
    let state = AppState::new(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("Listening on {} (demo mode: {})", listener.local_addr()?, demo_mode);

    axum::serve(listener, app).await.context("Server error")
}
