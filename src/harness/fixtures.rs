//! Fixture file loading.
//!
//! A suite is two parallel JSON object files keyed by test name:
//! `<root>/payloads/<service>_testcases.json` holds the request payloads,
//! `<root>/responses/<service>_responses.json` the expected response fields.

use std::path::Path;

use serde_json::{Map, Value};

/// Error type for fixture loading.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON in fixture file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("fixture file {path} is not a JSON object")]
    NotAnObject { path: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Loaded payload/expected-response pair for one service.
#[derive(Debug, Clone)]
pub struct FixtureSuite {
    pub service: String,
    pub payloads: Map<String, Value>,
    pub responses: Map<String, Value>,
}

/// Load both fixture maps for a service.
pub fn load_suite(root: &Path, service: &str) -> Result<FixtureSuite, HarnessError> {
    let payloads = load_fixture_map(&root.join("payloads").join(format!("{service}_testcases.json")))?;
    let responses = load_fixture_map(&root.join("responses").join(format!("{service}_responses.json")))?;

    Ok(FixtureSuite {
        service: service.to_string(),
        payloads,
        responses,
    })
}

fn load_fixture_map(path: &Path) -> Result<Map<String, Value>, HarnessError> {
    let content = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| HarnessError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(HarnessError::NotAnObject {
            path: path.display().to_string(),
        }),
    }
}
