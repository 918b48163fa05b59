//! ISCS listener setup and request dispatch.
//!
//! # Responsibilities
//! - Build the axum Router for the dispatch table
//! - Select the upstream target per route
//! - Delegate to the Forwarder and mirror its result verbatim
//! - Answer `/health` locally and everything unmatched with a JSON 404
//!
//! # Design Decisions
//! - Handlers take the body as `Bytes` and mirror `Bytes`: pass-through is
//!   byte-level, the router never parses what it forwards
//! - Every response carries `Content-Type: application/json`, even when the
//!   upstream body is not valid JSON
//! - No per-request access logging; lifecycle events only

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::config::IscsConfig;
use crate::forward::{ForwardResult, Forwarder};
use crate::routing::UpstreamTargets;

/// Per-upstream-call timeout for interactive routing.
const FORWARD_TIMEOUT: Duration = Duration::from_secs(5);

/// Outer deadline on a whole inbound request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state injected into handlers.
///
/// Read-only after startup; cloning shares the target table and client.
#[derive(Clone)]
pub struct AppState {
    targets: Arc<UpstreamTargets>,
    forwarder: Forwarder,
}

/// The ISCS HTTP server.
pub struct HttpServer {
    router: Router,
    config: IscsConfig,
}

impl HttpServer {
    /// Create a server for the given resolved configuration.
    pub fn new(config: IscsConfig) -> Self {
        let state = AppState {
            targets: Arc::new(UpstreamTargets::from_config(&config)),
            forwarder: Forwarder::new(FORWARD_TIMEOUT),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the dispatch table.
    ///
    /// Method fallbacks keep the contract uniform: any method/path pair
    /// outside the table answers 404, not 405.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/user", post(create_user).fallback(not_found))
            .route("/user/{id}", get(lookup_user).fallback(not_found))
            .route("/product", post(create_product).fallback(not_found))
            .route("/product/{id}", get(lookup_product).fallback(not_found))
            .route("/health", get(health).fallback(not_found))
            .fallback(not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "ISCS listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("ISCS stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &IscsConfig {
        &self.config
    }
}

async fn create_user(State(state): State<AppState>, body: Bytes) -> Response {
    let result = state
        .forwarder
        .forward(&state.targets.user_create(), Method::POST, Some(body))
        .await;
    mirror(result)
}

async fn create_product(State(state): State<AppState>, body: Bytes) -> Response {
    let result = state
        .forwarder
        .forward(&state.targets.product_create(), Method::POST, Some(body))
        .await;
    mirror(result)
}

async fn lookup_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = state
        .forwarder
        .forward(&state.targets.user_lookup(&id), Method::GET, None)
        .await;
    mirror(result)
}

async fn lookup_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = state
        .forwarder
        .forward(&state.targets.product_lookup(&id), Method::GET, None)
        .await;
    mirror(result)
}

/// Static liveness payload; never contacts a backend.
async fn health() -> Response {
    json_response(StatusCode::OK, r#"{"status": "ISCS is running"}"#)
}

async fn not_found() -> Response {
    json_response(StatusCode::NOT_FOUND, r#"{"error": "Not found"}"#)
}

/// Mirror a forwarded result back to the client unchanged.
fn mirror(result: ForwardResult) -> Response {
    (
        result.status,
        [(header::CONTENT_TYPE, "application/json")],
        result.body,
    )
        .into_response()
}

fn json_response(status: StatusCode, body: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
