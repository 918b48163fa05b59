//! Inter-Service Communication Server (ISCS).
//!
//! A thin HTTP routing layer that forwards client requests to a User or
//! Product backend, plus the client-side drivers that exercise it.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────┐
//!                        │                  ISCS                    │
//!                        │                                          │
//!    Client Request      │  ┌─────────┐   ┌─────────┐   ┌────────┐ │
//!    ────────────────────┼─▶│  http   │──▶│ routing │──▶│forward │─┼──▶ User /
//!                        │  │ server  │   │ targets │   │        │ │    Product
//!    Client Response     │  └─────────┘   └─────────┘   └────┬───┘ │    Service
//!    ◀───────────────────┼────────── status + body ◀─────────┘     │
//!                        │                                          │
//!                        │  ┌────────────────────────────────────┐  │
//!                        │  │        config (loaded once)        │  │
//!                        │  └────────────────────────────────────┘  │
//!                        └──────────────────────────────────────────┘
//!
//!    workload (replayer) ──▶ order service     independent HTTP drivers,
//!    harness  (fixtures) ──▶ order service     no shared in-process state
//! ```
//!
//! The router holds no mutable state: configuration is resolved once at
//! startup and shared read-only with every connection task. Each request is
//! a single synchronous pass-through call: no retries, no pooling policy,
//! no load balancing.

// Core subsystems
pub mod config;
pub mod forward;
pub mod http;
pub mod routing;

// Client-side drivers
pub mod harness;
pub mod workload;

pub use config::IscsConfig;
pub use http::HttpServer;
