//! Binding between `lambda_runtime` and the echo handler.

use chrono::Utc;
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

use edge_echo_lib::{Echo, EchoConfig, InvocationContext, InvocationEvent, ResponseEnvelope};

/// Lambda entry point.
///
/// The event arrives as raw JSON so that any payload, object-shaped or not,
/// produces a response. Configuration is read from the environment on every
/// invocation.
pub async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();
    respond(payload, &context, &EchoConfig::from_env())
}

/// Handle one invocation with explicit configuration.
pub fn respond(
    payload: Value,
    context: &Context,
    config: &EchoConfig,
) -> Result<ResponseEnvelope, Error> {
    let event = InvocationEvent::from_value(payload);
    let echo = Echo::resolve(&event, &invocation_context(context), config, Utc::now());

    info!(
        request_id = %context.request_id,
        front_door = %echo.front_door,
        method = %echo.payload.method,
        path = %echo.payload.path,
        client_ip = %echo.payload.client_ip,
        region = %echo.payload.region,
        "handling echo request"
    );
    debug!(
        request_id = %context.request_id,
        headers = ?echo.payload.headers,
        "forwarding headers"
    );

    Ok(echo.into_envelope()?)
}

/// Project the runtime context onto the fields the handler reads.
pub fn invocation_context(context: &Context) -> InvocationContext {
    InvocationContext {
        invoked_function_arn: Some(context.invoked_function_arn.clone())
            .filter(|arn| !arn.is_empty()),
    }
}
