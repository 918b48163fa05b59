//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader.rs (read & deserialize)
//!     → ConfigFile (raw optional sections)
//!     → IscsConfig::resolve (apply per-service defaults)
//!     → IscsConfig (immutable, process lifetime)
//!     → shared with the router at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Every field is optional; missing sections fall back to defaults
//! - A missing file or invalid JSON is fatal before the listener binds

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{IscsConfig, ServiceEndpoint};
