//! forzactl - Forza "Data Out" telemetry CLI
//!
//! Decodes captured datagrams and listens for the live UDP stream.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use forza_telemetry_listener::ListenerError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{DecodeArgs, ListenArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "forzactl")]
#[command(about = "Decode and monitor Forza Motorsport / Forza Horizon telemetry")]
#[command(version)]
#[command(long_about = "
forzactl reads the UDP \"Data Out\" stream emitted by Forza Motorsport and
Forza Horizon. Point the game's Data Out IP/port at this machine and run
`forzactl listen`, or decode a single captured datagram with `forzactl decode`.
")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Listen for live telemetry and print events
    Listen(ListenArgs),

    /// Decode one captured datagram from a file
    Decode(DecodeArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "forzactl={log_level},forza_telemetry={log_level},\
                     forza_telemetry_listener={log_level}"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match execute_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error_human(&e);
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Listen(args) => commands::listen::execute(args).await,
        Commands::Decode(args) => commands::decode::execute(args),
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(cli_error) = err.downcast_ref::<CliError>() {
        return cli_error.exit_code();
    }
    err.downcast_ref::<ListenerError>()
        .map_or(1, error::listener_exit_code)
}
