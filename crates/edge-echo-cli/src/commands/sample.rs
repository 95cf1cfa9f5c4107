//! `sample` subcommand: print a representative event.

use std::io::Write;

use anyhow::Result;

use edge_echo_lib::Sample;

use crate::commands::write_json;
use crate::SampleArgs;

pub fn handle_sample(args: &SampleArgs, out: &mut impl Write) -> Result<()> {
    let sample = Sample::from(args.front_door);
    write_json(out, &sample.event(), args.pretty)
}
