//! The invocation handler.
//!
//! One linear pass per call: detect the front door, resolve the request
//! fields, assemble the payload, shape the envelope. Every reachable path
//! yields status 200.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::config::EchoConfig;
use crate::envelope::ResponseEnvelope;
use crate::error::{Error, Result};
use crate::event::{InvocationContext, InvocationEvent};
use crate::front_door::FrontDoor;
use crate::payload::{EchoPayload, ForwardedHeaders, GREETING};
use crate::request::{resolve_client_ip, resolve_method, resolve_path, resolve_region};

/// A resolved invocation, ready to be shaped into a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echo {
    pub front_door: FrontDoor,
    pub payload: EchoPayload,
}

impl Echo {
    /// Resolve every payload field from the event, context, and configuration.
    pub fn resolve(
        event: &InvocationEvent,
        context: &InvocationContext,
        config: &EchoConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let front_door = FrontDoor::detect(event);
        let payload = EchoPayload {
            message: GREETING.to_string(),
            region: resolve_region(config, context).to_string(),
            time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            method: resolve_method(event).to_string(),
            path: resolve_path(event).to_string(),
            client_ip: resolve_client_ip(event).to_string(),
            via: front_door.via().to_string(),
            headers: ForwardedHeaders::from_event(event),
        };

        debug!(
            front_door = %front_door,
            forwarded_headers = payload.headers.count(),
            "resolved invocation"
        );

        Self {
            front_door,
            payload,
        }
    }

    /// Serialize the payload into the envelope the front door expects.
    pub fn into_envelope(self) -> Result<ResponseEnvelope> {
        let body = serde_json::to_string(&self.payload).map_err(Error::SerializePayload)?;
        Ok(ResponseEnvelope::json(self.front_door, body))
    }
}

/// Handle one invocation at the given instant.
pub fn echo(
    event: &InvocationEvent,
    context: &InvocationContext,
    config: &EchoConfig,
    now: DateTime<Utc>,
) -> Result<ResponseEnvelope> {
    Echo::resolve(event, context, config, now).into_envelope()
}

/// Handle one invocation stamped with the current time.
pub fn echo_now(
    event: &InvocationEvent,
    context: &InvocationContext,
    config: &EchoConfig,
) -> Result<ResponseEnvelope> {
    echo(event, context, config, Utc::now())
}
