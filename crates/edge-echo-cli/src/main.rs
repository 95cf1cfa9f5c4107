use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use edge_echo_cli::commands::invoke::handle_invoke;
use edge_echo_cli::commands::sample::handle_sample;
use edge_echo_cli::{Cli, Command};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Invoke(args) => handle_invoke(&args, io::stdin().lock(), &mut stdout),
        Command::Sample(args) => handle_sample(&args, &mut stdout),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
