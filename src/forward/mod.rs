//! Outbound HTTP forwarding.
//!
//! # Responsibilities
//! - Issue the upstream call for a routed request
//! - Enforce a fixed per-call timeout
//! - Pass upstream status and body through unchanged
//! - Convert transport failures into a synthetic 500 JSON envelope
//!
//! # Design Decisions
//! - Upstream HTTP errors are NOT reinterpreted; only transport-level
//!   failures (refused connection, timeout, bad target URL) fabricate a
//!   status, and that status is always 500
//! - Bodies are buffered whole; pass-through is byte-level, never a
//!   deserialize/reserialize round trip

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

/// Upper bound on a buffered upstream response body.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Outcome of one forwarded call: the status and body to mirror back.
#[derive(Debug, Clone)]
pub struct ForwardResult {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Failure below the HTTP layer; never surfaced to clients directly.
#[derive(Debug, thiserror::Error)]
enum ForwardFailure {
    #[error("invalid upstream request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("upstream request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("upstream request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("failed to read upstream response body: {0}")]
    Body(#[from] axum::Error),
}

/// Synchronous pass-through HTTP client for one class of upstream calls.
///
/// Cheap to clone; the underlying hyper client is shared.
#[derive(Clone)]
pub struct Forwarder {
    client: Client<HttpConnector, Body>,
    timeout: Duration,
}

impl Forwarder {
    /// Create a forwarder with a fixed per-call timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, timeout }
    }

    /// Forward a request and return the upstream's status and body.
    ///
    /// For POST with a body, the bytes are sent verbatim with
    /// `Content-Type: application/json`; GET sends no body. Transport
    /// failures return a synthesized `500 {"error": <message>}` instead of
    /// an error, so callers always have something to mirror.
    pub async fn forward(&self, url: &str, method: Method, body: Option<Bytes>) -> ForwardResult {
        match self.try_forward(url, method, body).await {
            Ok(result) => result,
            Err(failure) => {
                tracing::warn!(url = %url, error = %failure, "Forwarding failed");
                synthesize_error(&failure.to_string())
            }
        }
    }

    async fn try_forward(
        &self,
        url: &str,
        method: Method,
        body: Option<Bytes>,
    ) -> Result<ForwardResult, ForwardFailure> {
        let builder = Request::builder().method(method).uri(url);
        let request = match body {
            Some(bytes) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(bytes))?,
            None => builder.body(Body::empty())?,
        };

        let response = tokio::time::timeout(self.timeout, self.client.request(request))
            .await
            .map_err(|_| ForwardFailure::TimedOut(self.timeout))??;

        let status = response.status();
        let body = axum::body::to_bytes(Body::new(response.into_body()), MAX_BODY_BYTES).await?;

        Ok(ForwardResult { status, body })
    }
}

/// Build the 500 envelope for a transport-level failure.
fn synthesize_error(message: &str) -> ForwardResult {
    let body = serde_json::json!({ "error": message }).to_string();
    ForwardResult {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: Bytes::from(body),
    }
}
