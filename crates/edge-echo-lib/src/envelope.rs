//! Response envelope returned to the host runtime.

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::front_door::FrontDoor;

/// Fixed response headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    #[serde(rename = "content-type")]
    pub content_type: String,

    #[serde(rename = "cache-control")]
    pub cache_control: String,

    #[serde(rename = "access-control-allow-origin")]
    pub access_control_allow_origin: String,
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            content_type: "application/json".to_string(),
            cache_control: "no-store".to_string(),
            access_control_allow_origin: "*".to_string(),
        }
    }
}

/// Structured response understood by load balancers, API Gateway, and
/// function URLs.
///
/// Load balancer targets must also carry `statusDescription` and
/// `isBase64Encoded`; the other front doors get neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,

    pub headers: ResponseHeaders,

    /// Serialized JSON document.
    pub body: String,
}

impl ResponseEnvelope {
    /// Wrap a JSON body in the envelope shape `front_door` expects.
    pub fn json(front_door: FrontDoor, body: String) -> Self {
        let status = StatusCode::OK;
        let (status_description, is_base64_encoded) = match front_door {
            FrontDoor::LoadBalancer => (Some(status_line(status)), Some(false)),
            FrontDoor::ApiGateway | FrontDoor::Direct => (None, None),
        };

        Self {
            status_code: status.as_u16(),
            status_description,
            is_base64_encoded,
            headers: ResponseHeaders::default(),
            body,
        }
    }

    /// Parse the body back into a typed document.
    pub fn parse_body<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Error::InvalidBody)
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn load_balancer_envelope_carries_status_description() {
        let envelope = ResponseEnvelope::json(FrontDoor::LoadBalancer, "{}".to_string());
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "statusDescription": "200 OK",
                "isBase64Encoded": false,
                "headers": {
                    "content-type": "application/json",
                    "cache-control": "no-store",
                    "access-control-allow-origin": "*"
                },
                "body": "{}"
            })
        );
    }

    #[test]
    fn other_envelopes_omit_load_balancer_fields() {
        for front_door in [FrontDoor::ApiGateway, FrontDoor::Direct] {
            let envelope = ResponseEnvelope::json(front_door, "{}".to_string());
            let value = serde_json::to_value(&envelope).unwrap();
            let object = value.as_object().unwrap();

            assert_eq!(object["statusCode"], 200);
            assert!(!object.contains_key("statusDescription"));
            assert!(!object.contains_key("isBase64Encoded"));
            assert_eq!(object["headers"]["cache-control"], "no-store");
        }
    }

    #[test]
    fn parse_body_reports_invalid_json() {
        let envelope = ResponseEnvelope::json(FrontDoor::Direct, "not json".to_string());
        let err = envelope.parse_body::<Value>().unwrap_err();
        assert!(matches!(err, Error::InvalidBody(_)));
    }

    #[test]
    fn status_line_uses_canonical_reason() {
        assert_eq!(status_line(StatusCode::OK), "200 OK");
        assert_eq!(status_line(StatusCode::NOT_FOUND), "404 Not Found");
    }
}
