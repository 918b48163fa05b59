//! Fixture-driven regression harness.
//!
//! # Data Flow
//! ```text
//! fixtures (<root>/payloads/*, <root>/responses/*)
//!     → fixtures.rs (load parallel name→payload / name→expected maps)
//!     → runner.rs (POST each payload to the order service)
//!     → verify.rs (status + field-by-field comparison)
//!     → HarnessReport (pass/fail/error counters, failure reasons)
//! ```

pub mod fixtures;
pub mod runner;
pub mod verify;

pub use fixtures::{load_suite, FixtureSuite, HarnessError};
pub use runner::{HarnessReport, TestHarness};
pub use verify::{expected_status_from_name, verify_response};
