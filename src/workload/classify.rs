//! Endpoint classification for workload commands.
//!
//! Commands carry no routing field; the endpoint is inferred from which keys
//! are present. The heuristic is fragile on purpose: it is preserved exactly
//! as deployed, including the verb gate on non-create commands, so replayed
//! traffic lands where it always has. A line with a `price` field but a verb
//! that is neither `create` nor contains `update`/`delete` stays on `/order`.

use serde_json::Value;

/// Replay target for one workload command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    User,
    Product,
    Order,
}

impl Endpoint {
    /// Request path on the order service.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::User => "/user",
            Endpoint::Product => "/product",
            Endpoint::Order => "/order",
        }
    }
}

/// Pick the endpoint for a parsed command.
///
/// Field presence decides: `username`/`email` mean user, `productname`/
/// `price` mean product, everything else defaults to order. Non-object
/// commands and commands without a string `command` field replay to
/// `/order` unclassified.
pub fn classify(command: &Value) -> Endpoint {
    let Some(fields) = command.as_object() else {
        return Endpoint::Order;
    };

    let has_user_fields = fields.contains_key("username") || fields.contains_key("email");
    let has_product_fields = fields.contains_key("productname") || fields.contains_key("price");

    let Some(verb) = fields.get("command").and_then(Value::as_str) else {
        return Endpoint::Order;
    };
    let verb = verb.to_lowercase();

    let classify_by_fields = || {
        if has_user_fields {
            Endpoint::User
        } else if has_product_fields {
            Endpoint::Product
        } else {
            Endpoint::Order
        }
    };

    if verb == "create" {
        classify_by_fields()
    } else if has_user_fields || verb.contains("update") || verb.contains("delete") {
        classify_by_fields()
    } else {
        Endpoint::Order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_with_user_fields_routes_to_user() {
        let cmd = json!({"command": "create", "username": "alice", "email": "a@x.com"});
        assert_eq!(classify(&cmd), Endpoint::User);
    }

    #[test]
    fn create_with_product_fields_routes_to_product() {
        let cmd = json!({"command": "create", "productname": "Widget", "price": 9.99});
        assert_eq!(classify(&cmd), Endpoint::Product);
    }

    #[test]
    fn create_without_known_fields_routes_to_order() {
        let cmd = json!({"command": "create", "orderid": 1});
        assert_eq!(classify(&cmd), Endpoint::Order);
    }

    #[test]
    fn user_fields_win_over_product_fields() {
        let cmd = json!({"command": "create", "email": "a@x.com", "price": 5});
        assert_eq!(classify(&cmd), Endpoint::User);
    }

    #[test]
    fn update_verb_with_price_routes_to_product() {
        let cmd = json!({"command": "UPDATE", "price": 12});
        assert_eq!(classify(&cmd), Endpoint::Product);
    }

    #[test]
    fn unrelated_verb_with_price_stays_on_order() {
        // The verb gate: no create/update/delete and no user fields.
        let cmd = json!({"command": "refund", "price": 12});
        assert_eq!(classify(&cmd), Endpoint::Order);
    }

    #[test]
    fn missing_command_field_stays_on_order() {
        let cmd = json!({"username": "alice"});
        assert_eq!(classify(&cmd), Endpoint::Order);
    }

    #[test]
    fn non_object_command_stays_on_order() {
        assert_eq!(classify(&json!([1, 2, 3])), Endpoint::Order);
        assert_eq!(classify(&json!(42)), Endpoint::Order);
    }
}
