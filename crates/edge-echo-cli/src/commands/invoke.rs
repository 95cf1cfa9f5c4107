//! `invoke` subcommand: run the handler once against an event.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::debug;

use edge_echo_lib::{echo_now, EchoConfig, InvocationContext, InvocationEvent};

use crate::commands::write_json;
use crate::InvokeArgs;

/// Run the handler and write the envelope (or its body) to `out`.
///
/// `stdin` is only read when the event path is `-`.
pub fn handle_invoke(args: &InvokeArgs, stdin: impl Read, out: &mut impl Write) -> Result<()> {
    let raw = read_event(args.event.as_deref(), stdin)?;
    let event = InvocationEvent::from_value(raw);

    let mut config = EchoConfig::from_env();
    if let Some(region) = &args.region {
        config.region = Some(region.clone());
    }

    let context = args
        .function_arn
        .clone()
        .map(InvocationContext::with_function_arn)
        .unwrap_or_default();

    let envelope = echo_now(&event, &context, &config).context("handler failed")?;

    let output = if args.body_only {
        envelope
            .parse_body::<Value>()
            .context("handler produced an invalid body")?
    } else {
        serde_json::to_value(&envelope).context("failed to encode response envelope")?
    };

    write_json(out, &output, args.pretty)
}

fn read_event(path: Option<&Path>, mut stdin: impl Read) -> Result<Value> {
    let text = match path {
        None => return Ok(Value::Object(Map::new())),
        Some(p) if p == Path::new("-") => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read event from stdin")?;
            buf
        }
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("failed to read event file {}", p.display()))?,
    };

    debug!(bytes = text.len(), "read event");
    serde_json::from_str(&text).context("event is not valid JSON")
}
