//! AWS Lambda binding for the edge-echo diagnostic endpoint.
//!
//! - [`handler`]: the `service_fn` entry point
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs

#![deny(warnings)]

mod function;
mod tracing_init;

pub use function::{handler, invocation_context, respond};
pub use tracing_init::{init_tracing, LogFormat, LoggingConfig};
