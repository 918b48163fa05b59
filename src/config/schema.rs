//! Configuration schema definitions.
//!
//! The raw file shape (`ConfigFile`) mirrors the JSON layout: three optional
//! sections, each with optional `ip` and `port`. Resolution applies the
//! per-service defaults and produces the immutable `IscsConfig` the rest of
//! the system reads.

use serde::Deserialize;

/// Default bind/connect host for every service.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default UserService port.
pub const DEFAULT_USER_PORT: u16 = 14001;

/// Default ProductService port.
pub const DEFAULT_PRODUCT_PORT: u16 = 15000;

/// Default ISCS listen port.
pub const DEFAULT_ISCS_PORT: u16 = 14002;

/// One optional `{ip, port}` section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EndpointSection {
    pub ip: Option<String>,
    pub port: Option<u16>,
}

/// Raw deserialized shape of the config file.
///
/// Section names match the JSON keys of the deployment config. Unknown keys
/// are ignored, absent sections resolve entirely to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(rename = "UserService")]
    pub user_service: EndpointSection,

    #[serde(rename = "ProductService")]
    pub product_service: EndpointSection,

    #[serde(rename = "InterServiceCommunication")]
    pub inter_service: EndpointSection,
}

/// A resolved host/port pair for one logical service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    fn resolve(section: &EndpointSection, default_port: u16) -> Self {
        Self {
            host: section.ip.clone().unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: section.port.unwrap_or(default_port),
        }
    }

    /// Base URL for outbound requests to this service.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// `host:port` form, for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Resolved configuration, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct IscsConfig {
    /// UserService upstream.
    pub user: ServiceEndpoint,

    /// ProductService upstream.
    pub product: ServiceEndpoint,

    /// The ISCS's own listen endpoint.
    pub listener: ServiceEndpoint,
}

impl IscsConfig {
    /// Apply per-service defaults to a raw config file.
    pub fn resolve(file: ConfigFile) -> Self {
        Self {
            user: ServiceEndpoint::resolve(&file.user_service, DEFAULT_USER_PORT),
            product: ServiceEndpoint::resolve(&file.product_service, DEFAULT_PRODUCT_PORT),
            listener: ServiceEndpoint::resolve(&file.inter_service, DEFAULT_ISCS_PORT),
        }
    }
}

impl Default for IscsConfig {
    fn default() -> Self {
        Self::resolve(ConfigFile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_resolves_to_defaults() {
        let config = IscsConfig::resolve(ConfigFile::default());
        assert_eq!(config.user.base_url(), "http://127.0.0.1:14001");
        assert_eq!(config.product.base_url(), "http://127.0.0.1:15000");
        assert_eq!(config.listener.bind_address(), "127.0.0.1:14002");
    }

    #[test]
    fn sections_override_independently() {
        let file: ConfigFile = serde_json::from_str(
            r#"{
                "UserService": {"ip": "10.0.0.5", "port": 9001},
                "ProductService": {"port": 9002}
            }"#,
        )
        .unwrap();

        let config = IscsConfig::resolve(file);
        assert_eq!(config.user.base_url(), "http://10.0.0.5:9001");
        assert_eq!(config.product.base_url(), "http://127.0.0.1:9002");
        assert_eq!(config.listener.port, DEFAULT_ISCS_PORT);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let file: ConfigFile = serde_json::from_str(
            r#"{"OrderService": {"ip": "1.2.3.4", "port": 14000}}"#,
        )
        .unwrap();

        let config = IscsConfig::resolve(file);
        assert_eq!(config.user.port, DEFAULT_USER_PORT);
    }
}
