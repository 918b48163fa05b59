//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;

use iscs::config::{IscsConfig, ServiceEndpoint};
use iscs::HttpServer;

/// One request observed by a mock upstream.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub body: Bytes,
}

/// Requests recorded by a mock upstream, shared with the test body.
pub type Recorded = Arc<Mutex<Vec<SeenRequest>>>;

/// Serve an axum app on an ephemeral local port.
pub async fn spawn_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Start a mock upstream answering every request with a fixed status and
/// body, recording what it saw.
pub async fn spawn_recording_upstream(status: u16, body: &'static str) -> (SocketAddr, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .fallback(any(
            move |State(seen): State<Recorded>, request: Request| async move {
                let method = request.method().to_string();
                let path = request.uri().path().to_string();
                let bytes = axum::body::to_bytes(request.into_body(), 1024 * 1024)
                    .await
                    .unwrap();
                seen.lock().unwrap().push(SeenRequest {
                    method,
                    path,
                    body: bytes,
                });
                (StatusCode::from_u16(status).unwrap(), body)
            },
        ))
        .with_state(recorded.clone());

    let addr = spawn_app(app).await;
    (addr, recorded)
}

/// An address guaranteed to refuse connections.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Resolved config pointing the router at the given upstreams.
#[allow(dead_code)]
pub fn config_for(user: SocketAddr, product: SocketAddr) -> IscsConfig {
    IscsConfig {
        user: endpoint(user),
        product: endpoint(product),
        listener: ServiceEndpoint {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    }
}

fn endpoint(addr: SocketAddr) -> ServiceEndpoint {
    ServiceEndpoint {
        host: addr.ip().to_string(),
        port: addr.port(),
    }
}

/// Start the ISCS server on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_iscs(config: IscsConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });
    addr
}
