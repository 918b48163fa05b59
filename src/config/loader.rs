//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::{ConfigFile, IscsConfig};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON in config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load and resolve configuration from a JSON file.
///
/// Missing sections and fields fall back to defaults; a missing file or
/// malformed JSON is an error the caller treats as fatal.
pub fn load_config(path: &Path) -> Result<IscsConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let file: ConfigFile =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    Ok(IscsConfig::resolve(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(
            r#"{
                "UserService": {"ip": "127.0.0.1", "port": 24001},
                "ProductService": {"ip": "127.0.0.1", "port": 25000},
                "InterServiceCommunication": {"ip": "0.0.0.0", "port": 24002}
            }"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.user.port, 24001);
        assert_eq!(config.product.port, 25000);
        assert_eq!(config.listener.bind_address(), "0.0.0.0:24002");
    }

    #[test]
    fn empty_object_is_valid() {
        let file = write_config("{}");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.port, 14002);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/iscs.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_config("{not json");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
