// Subcommand handlers. main.rs dispatches to these; each writes JSON to the
// supplied writer so stdout stays machine-readable.

pub mod invoke;
pub mod sample;

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::Value;

/// Write a JSON value followed by a newline.
pub(crate) fn write_json(out: &mut impl Write, value: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to render JSON output")?;

    writeln!(out, "{}", text).context("failed to write output")?;
    Ok(())
}
