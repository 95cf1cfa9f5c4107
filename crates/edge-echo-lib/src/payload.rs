//! The diagnostic document returned in the response body.

use serde::{Deserialize, Serialize};

use crate::event::InvocationEvent;

/// Fixed greeting carried in every payload.
pub const GREETING: &str = "Hello from AWS Lambda via Global Accelerator demo";

/// Diagnostic payload echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoPayload {
    pub message: String,
    pub region: String,
    /// ISO-8601 UTC timestamp taken when the payload was assembled.
    pub time: String,
    pub method: String,
    pub path: String,
    pub client_ip: String,
    pub via: String,
    pub headers: ForwardedHeaders,
}

/// Forwarding headers copied verbatim from the request.
///
/// Headers missing from the request are left out of the serialized object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardedHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(
        rename = "x-forwarded-for",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x_forwarded_for: Option<String>,

    #[serde(
        rename = "x-forwarded-proto",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x_forwarded_proto: Option<String>,

    #[serde(
        rename = "x-forwarded-port",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x_forwarded_port: Option<String>,

    #[serde(
        rename = "x-amzn-trace-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x_amzn_trace_id: Option<String>,
}

impl ForwardedHeaders {
    /// Copy the forwarding subset out of an event's headers. No fallbacks apply.
    pub fn from_event(event: &InvocationEvent) -> Self {
        let copy = |name: &str| event.header(name).map(str::to_owned);
        Self {
            host: copy("host"),
            x_forwarded_for: copy("x-forwarded-for"),
            x_forwarded_proto: copy("x-forwarded-proto"),
            x_forwarded_port: copy("x-forwarded-port"),
            x_amzn_trace_id: copy("x-amzn-trace-id"),
        }
    }

    /// Number of forwarding headers the request carried.
    pub fn count(&self) -> usize {
        [
            &self.host,
            &self.x_forwarded_for,
            &self.x_forwarded_proto,
            &self.x_forwarded_port,
            &self.x_amzn_trace_id,
        ]
        .iter()
        .filter(|value| value.is_some())
        .count()
    }
}
