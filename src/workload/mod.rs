//! Workload file replay.
//!
//! # Data Flow
//! ```text
//! workload file (one JSON command per line)
//!     → classify.rs (key-presence endpoint selection)
//!     → replay.rs (sequential POST per command, pass/fail counters)
//!     → ReplaySummary
//! ```

pub mod classify;
pub mod replay;

pub use classify::{classify, Endpoint};
pub use replay::{ReplayError, ReplaySummary, WorkloadRunner, DEFAULT_ORDER_SERVICE_URL};
