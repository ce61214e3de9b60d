//! Gateway (API-Gateway-shaped) event parser.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::types::{ParsedGatewayRequest, decode_object};

/// Wire shape of a gateway event. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGatewayEvent {
    http_method: String,
    path: String,
    headers: Option<HashMap<String, String>>,
    body: Option<String>,
}

/// Parse a gateway event into its single request.
///
/// Returns `None` when the event lacks a string `httpMethod` or `path`, when
/// `headers` is not a string map, or when a present body does not decode to a
/// JSON object. A null or missing body becomes an empty map.
pub fn parse_gateway_event(event: &Value) -> Option<ParsedGatewayRequest> {
    let raw = RawGatewayEvent::deserialize(event).ok()?;

    let body = match raw.body {
        Some(text) => decode_object(&text)?,
        None => Map::new(),
    };

    Some(ParsedGatewayRequest {
        http_method: raw.http_method,
        path: raw.path,
        headers: raw.headers.unwrap_or_default(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_post_request() {
        let event = json!({
            "httpMethod": "POST",
            "path": "/invoices",
            "headers": {"Content-Type": "application/json"},
            "body": r#"{"amount": 100, "client_id": "client_123"}"#
        });

        let request = parse_gateway_event(&event).unwrap();
        assert_eq!(request.http_method, "POST");
        assert_eq!(request.path, "/invoices");
        assert_eq!(request.headers["Content-Type"], "application/json");
        assert_eq!(request.body["amount"], 100);
        assert_eq!(request.body["client_id"], "client_123");
    }

    #[test]
    fn get_request_with_null_body() {
        let event = json!({
            "httpMethod": "GET",
            "path": "/invoices/inv_123",
            "headers": {},
            "body": null
        });

        let request = parse_gateway_event(&event).unwrap();
        assert_eq!(request.http_method, "GET");
        assert!(request.body.is_empty());
    }

    #[test]
    fn missing_headers_and_body_default_to_empty() {
        let event = json!({"httpMethod": "GET", "path": "/x", "body": null});

        let request = parse_gateway_event(&event).unwrap();
        assert_eq!(
            request,
            ParsedGatewayRequest {
                http_method: "GET".into(),
                path: "/x".into(),
                headers: HashMap::new(),
                body: Map::new(),
            }
        );
    }

    #[test]
    fn null_headers_default_to_empty() {
        let event = json!({"httpMethod": "DELETE", "path": "/x", "headers": null});
        let request = parse_gateway_event(&event).unwrap();
        assert!(request.headers.is_empty());
    }

    #[test]
    fn invalid_json_body_yields_none() {
        let event = json!({
            "httpMethod": "POST",
            "path": "/invoices",
            "body": r#"{"amount": 100, "client_id":"#
        });
        assert!(parse_gateway_event(&event).is_none());
    }

    #[test]
    fn non_object_body_yields_none() {
        let event = json!({"httpMethod": "POST", "path": "/x", "body": "[1, 2]"});
        assert!(parse_gateway_event(&event).is_none());
    }

    #[test]
    fn queue_event_yields_none() {
        let event = json!({"Records": [{}]});
        assert!(parse_gateway_event(&event).is_none());
    }

    #[test]
    fn missing_path_yields_none() {
        let event = json!({"httpMethod": "GET"});
        assert!(parse_gateway_event(&event).is_none());
    }

    #[test]
    fn malformed_headers_yield_none() {
        let event = json!({"httpMethod": "GET", "path": "/x", "headers": ["a"]});
        assert!(parse_gateway_event(&event).is_none());

        let event = json!({"httpMethod": "GET", "path": "/x", "headers": {"X-Count": 3}});
        assert!(parse_gateway_event(&event).is_none());
    }

    #[test]
    fn null_header_value_yields_none() {
        let event = json!({"httpMethod": "GET", "path": "/x", "headers": {"a": null}});
        assert!(parse_gateway_event(&event).is_none());
    }

    #[test]
    fn non_object_event_yields_none() {
        assert!(parse_gateway_event(&json!(null)).is_none());
        assert!(parse_gateway_event(&json!("GET /x")).is_none());
    }
}
