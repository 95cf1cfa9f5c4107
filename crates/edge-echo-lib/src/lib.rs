//! edge-echo library entry points.
//!
//! This crate holds everything the diagnostic echo endpoint does: a partial
//! model of the host invocation event, front-door detection, field resolution
//! with ordered fallbacks, payload assembly, and response envelope shaping.
//! Higher-level consumers (the Lambda binary, the local invoke CLI) should only
//! call [`echo`] or [`Echo`] instead of reimplementing any of it.
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixed timestamps and body helpers. Enable
//! the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

pub mod config;
pub mod envelope;
pub mod error;
pub mod event;
pub mod fallback;
pub mod front_door;
pub mod handler;
pub mod payload;
pub mod request;
pub mod samples;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{EchoConfig, REGION_VAR};
pub use envelope::{ResponseEnvelope, ResponseHeaders};
pub use error::{Error, Result};
pub use event::{HttpContext, Identity, InvocationContext, InvocationEvent, RequestContext};
pub use fallback::first_truthy;
pub use front_door::FrontDoor;
pub use handler::{echo, echo_now, Echo};
pub use payload::{EchoPayload, ForwardedHeaders, GREETING};
pub use samples::Sample;
