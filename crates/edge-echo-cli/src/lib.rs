//! edge-echo CLI library.
//!
//! Argument definitions and subcommand handlers for running the echo handler
//! outside Lambda.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use edge_echo_lib::Sample;

pub mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Invoke the edge-echo handler locally")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the handler against an event and print the response envelope.
    Invoke(InvokeArgs),
    /// Print a representative event for a front door.
    Sample(SampleArgs),
}

#[derive(Args, Debug, Default)]
pub struct InvokeArgs {
    /// Event JSON file, or `-` for stdin. An empty event is used when omitted.
    #[arg(long)]
    pub event: Option<PathBuf>,

    /// Invoked function ARN; its 4th segment supplies the region.
    #[arg(long)]
    pub function_arn: Option<String>,

    /// Region to report. Defaults to `AWS_REGION`.
    #[arg(long)]
    pub region: Option<String>,

    /// Print only the parsed response body.
    #[arg(long)]
    pub body_only: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Which front door the event should look like.
    #[arg(long, value_enum)]
    pub front_door: FrontDoorArg,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FrontDoorArg {
    /// Application Load Balancer.
    Alb,
    /// API Gateway REST API.
    RestApi,
    /// API Gateway HTTP API.
    HttpApi,
    /// Direct invoke.
    Direct,
}

impl From<FrontDoorArg> for Sample {
    fn from(value: FrontDoorArg) -> Self {
        match value {
            FrontDoorArg::Alb => Sample::Alb,
            FrontDoorArg::RestApi => Sample::RestApi,
            FrontDoorArg::HttpApi => Sample::HttpApi,
            FrontDoorArg::Direct => Sample::Direct,
        }
    }
}
