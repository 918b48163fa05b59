//! Sequential workload replay.
//!
//! # Responsibilities
//! - Read the workload file line by line
//! - Skip blanks and `#` comments, diagnose malformed JSON
//! - POST each command to its classified endpoint
//! - Accumulate pass/fail counters and elapsed time
//!
//! # Design Decisions
//! - One outstanding request at a time, no retry, no early abort
//! - `total` counts only lines that parse as JSON; malformed lines count
//!   as failures with a per-line diagnostic
//! - Only status 200 counts as success; an unreachable service is a
//!   failure, not a crash

use std::path::Path;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::workload::classify::{classify, Endpoint};

/// Default order-service target for replay.
pub const DEFAULT_ORDER_SERVICE_URL: &str = "http://127.0.0.1:14000";

/// Per-request timeout during replay.
const REPLAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for workload replay.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read workload file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Counters for one replayed workload file.
#[derive(Debug, Clone, Default)]
pub struct ReplaySummary {
    /// Lines that parsed as JSON and were dispatched.
    pub total: u64,

    /// Dispatched commands answered with status 200.
    pub succeeded: u64,

    /// Malformed lines plus dispatched commands that did not return 200.
    pub failed: u64,

    /// Wall-clock time for the whole file.
    pub elapsed: Duration,
}

/// Sequential replay driver for a workload file.
pub struct WorkloadRunner {
    client: reqwest::Client,
    base_url: String,
}

impl WorkloadRunner {
    /// Create a runner targeting the given order-service base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ReplayError> {
        let client = reqwest::Client::builder().timeout(REPLAY_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Replay a workload file and return the accumulated counters.
    pub async fn replay_file(&self, path: &Path) -> Result<ReplaySummary, ReplayError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ReplayError::Io {
                    path: path.display().to_string(),
                    source,
                })?;

        Ok(self.replay_lines(&content).await)
    }

    /// Replay already-loaded workload text, one command per line.
    pub async fn replay_lines(&self, content: &str) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        let start = Instant::now();

        for (index, raw) in content.lines().enumerate() {
            let line_num = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command: Value = match serde_json::from_str(line) {
                Ok(value) => value,
                Err(_) => {
                    println!("Line {line_num}: Invalid JSON - {line}");
                    summary.failed += 1;
                    continue;
                }
            };
            summary.total += 1;

            match self.dispatch(classify(&command), &command).await {
                Ok(status) if status.as_u16() == 200 => summary.succeeded += 1,
                Ok(status) => {
                    println!("Line {line_num}: Status {}", status.as_u16());
                    summary.failed += 1;
                }
                Err(err) => {
                    println!("Line {line_num}: Connection error - {err}");
                    summary.failed += 1;
                }
            }
        }

        summary.elapsed = start.elapsed();
        summary
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        command: &Value,
    ) -> Result<reqwest::StatusCode, reqwest::Error> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let response = self.client.post(&url).json(command).send().await?;
        Ok(response.status())
    }
}
