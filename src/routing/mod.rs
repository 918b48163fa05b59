//! Upstream target selection.
//!
//! # Responsibilities
//! - Hold the resolved upstream base URLs
//! - Build the concrete URL for each dispatch-table route
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks, shared via Arc)
//! - Path parameters are interpolated as-is; a malformed id is forwarded
//!   unchanged and the backend is responsible for rejecting it

use crate::config::IscsConfig;

/// The two forwarding targets, resolved once at startup.
#[derive(Debug, Clone)]
pub struct UpstreamTargets {
    user_base: String,
    product_base: String,
}

impl UpstreamTargets {
    /// Derive the target table from resolved configuration.
    pub fn from_config(config: &IscsConfig) -> Self {
        Self {
            user_base: config.user.base_url(),
            product_base: config.product.base_url(),
        }
    }

    /// Target for `POST /user`.
    pub fn user_create(&self) -> String {
        format!("{}/user", self.user_base)
    }

    /// Target for `GET /user/{id}`.
    pub fn user_lookup(&self, id: &str) -> String {
        format!("{}/user/{}", self.user_base, id)
    }

    /// Target for `POST /product`.
    pub fn product_create(&self) -> String {
        format!("{}/product", self.product_base)
    }

    /// Target for `GET /product/{id}`.
    pub fn product_lookup(&self, id: &str) -> String {
        format!("{}/product/{}", self.product_base, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ConfigFile, IscsConfig};

    fn targets() -> UpstreamTargets {
        let file: ConfigFile = serde_json::from_str(
            r#"{
                "UserService": {"ip": "10.1.1.1", "port": 8001},
                "ProductService": {"ip": "10.1.1.2", "port": 8002}
            }"#,
        )
        .unwrap();
        UpstreamTargets::from_config(&IscsConfig::resolve(file))
    }

    #[test]
    fn builds_create_targets() {
        let t = targets();
        assert_eq!(t.user_create(), "http://10.1.1.1:8001/user");
        assert_eq!(t.product_create(), "http://10.1.1.2:8002/product");
    }

    #[test]
    fn builds_lookup_targets() {
        let t = targets();
        assert_eq!(t.user_lookup("42"), "http://10.1.1.1:8001/user/42");
        assert_eq!(t.product_lookup("42"), "http://10.1.1.2:8002/product/42");
    }

    #[test]
    fn malformed_ids_pass_through_unvalidated() {
        let t = targets();
        assert_eq!(t.user_lookup("abc"), "http://10.1.1.1:8001/user/abc");
    }
}
