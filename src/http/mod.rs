//! HTTP listener subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, dispatch table)
//!     → routing targets pick the upstream URL
//!     → forward::Forwarder issues the upstream call
//!     → status + body mirrored back unchanged
//! ```

pub mod server;

pub use server::HttpServer;
