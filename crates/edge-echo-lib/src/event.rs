//! Partial models of the host invocation event and context.
//!
//! Only the fields the handler reads are modelled and every one of them is
//! optional. A field holding an unexpected JSON type is treated as absent, so
//! any object-shaped event deserializes successfully.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The per-call request record supplied by the host runtime.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    /// Path as sent by HTTP APIs and function URLs.
    #[serde(default, deserialize_with = "lenient_string")]
    pub raw_path: Option<String>,

    /// Path as sent by REST APIs and load balancers.
    #[serde(default, deserialize_with = "lenient_string")]
    pub path: Option<String>,

    /// Method as sent by REST APIs and load balancers.
    #[serde(default, deserialize_with = "lenient_string")]
    pub http_method: Option<String>,

    /// Request headers, keyed exactly as delivered.
    #[serde(default, deserialize_with = "lenient_headers")]
    pub headers: HashMap<String, String>,

    #[serde(default, deserialize_with = "lenient_record")]
    pub request_context: Option<RequestContext>,
}

impl InvocationEvent {
    /// Build an event from an arbitrary JSON value.
    ///
    /// Values that are not objects yield an empty event.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Look up a header by its exact key.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn http(&self) -> Option<&HttpContext> {
        self.request_context.as_ref()?.http.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.request_context.as_ref()?.identity.as_ref()
    }
}

/// Front-door metadata attached to the event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// Load balancer marker. `Some` whenever the key exists, whatever its value.
    #[serde(default, deserialize_with = "present")]
    pub elb: Option<Value>,

    #[serde(default)]
    pub api_id: Option<Value>,

    #[serde(default)]
    pub stage: Option<Value>,

    #[serde(default, deserialize_with = "lenient_record")]
    pub http: Option<HttpContext>,

    #[serde(default, deserialize_with = "lenient_record")]
    pub identity: Option<Identity>,
}

/// HTTP details sent by HTTP APIs and function URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpContext {
    #[serde(default, deserialize_with = "lenient_string")]
    pub method: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub source_ip: Option<String>,
}

/// Caller identity sent by REST APIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default, deserialize_with = "lenient_string")]
    pub source_ip: Option<String>,
}

/// Execution metadata supplied alongside the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    /// ARN of the invoked function, e.g.
    /// `arn:aws:lambda:us-east-1:123456789012:function:foo`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub invoked_function_arn: Option<String>,
}

impl InvocationContext {
    pub fn with_function_arn(arn: impl Into<String>) -> Self {
        Self {
            invoked_function_arn: Some(arn.into()),
        }
    }
}

/// JavaScript-style truthiness for loosely typed marker fields.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_headers<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect(),
        _ => HashMap::new(),
    })
}

fn lenient_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_yields_default_event() {
        let event = InvocationEvent::from_value(json!({}));
        assert_eq!(event, InvocationEvent::default());
    }

    #[test]
    fn non_object_event_yields_default() {
        assert_eq!(
            InvocationEvent::from_value(json!("ping")),
            InvocationEvent::default()
        );
        assert_eq!(
            InvocationEvent::from_value(Value::Null),
            InvocationEvent::default()
        );
        assert_eq!(
            InvocationEvent::from_value(json!([1, 2, 3])),
            InvocationEvent::default()
        );
    }

    #[test]
    fn elb_marker_present_even_when_falsy() {
        for marker in [json!(false), Value::Null, json!(0), json!({})] {
            let event = InvocationEvent::from_value(json!({
                "requestContext": { "elb": marker.clone() }
            }));
            let ctx = event.request_context.expect("request context");
            assert!(ctx.elb.is_some(), "marker {marker:?} should count as present");
        }
    }

    #[test]
    fn elb_marker_absent_when_key_missing() {
        let event = InvocationEvent::from_value(json!({ "requestContext": { "stage": "prod" } }));
        assert!(event.request_context.unwrap().elb.is_none());
    }

    #[test]
    fn mistyped_fields_are_treated_as_absent() {
        let event = InvocationEvent::from_value(json!({
            "rawPath": 42,
            "path": "/legacy",
            "httpMethod": ["GET"],
            "headers": { "host": "example.com", "x-forwarded-port": 443 },
            "requestContext": { "http": "not-a-record", "identity": { "sourceIp": 7 } }
        }));

        assert_eq!(event.raw_path, None);
        assert_eq!(event.path.as_deref(), Some("/legacy"));
        assert_eq!(event.http_method, None);
        assert_eq!(event.header("host"), Some("example.com"));
        assert_eq!(event.header("x-forwarded-port"), None);
        assert!(event.http().is_none());
        assert_eq!(event.identity().unwrap().source_ip, None);
    }

    #[test]
    fn null_headers_and_context_are_absent() {
        let event = InvocationEvent::from_value(json!({
            "headers": null,
            "requestContext": null
        }));
        assert!(event.headers.is_empty());
        assert!(event.request_context.is_none());
    }

    #[test]
    fn header_lookup_is_case_sensitive() {
        let event = InvocationEvent::from_value(json!({
            "headers": { "X-Forwarded-For": "1.2.3.4" }
        }));
        assert_eq!(event.header("x-forwarded-for"), None);
        assert_eq!(event.header("X-Forwarded-For"), Some("1.2.3.4"));
    }

    #[test]
    fn context_deserializes_camel_case_arn() {
        let ctx: InvocationContext = serde_json::from_value(json!({
            "invokedFunctionArn": "arn:aws:lambda:eu-central-1:1:function:f"
        }))
        .unwrap();
        assert_eq!(
            ctx,
            InvocationContext::with_function_arn("arn:aws:lambda:eu-central-1:1:function:f")
        );
    }

    #[test]
    fn truthiness_follows_javascript_rules() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("prod")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
