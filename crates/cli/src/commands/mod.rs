//! Command implementations for forzactl

pub mod decode;
pub mod listen;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Args, Debug)]
pub struct ListenArgs {
    /// YAML listener configuration
    #[arg(short, long, env = "FORZACTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// UDP port (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Local address to bind (overrides the config file)
    #[arg(short, long)]
    pub bind: Option<IpAddr>,

    /// Output format for events
    #[arg(short, long, value_enum, default_value_t = ListenFormat::Text)]
    pub format: ListenFormat,

    /// Stop after this many seconds instead of waiting for Ctrl-C
    #[arg(short, long)]
    pub duration: Option<u64>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File holding exactly one captured datagram
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = DecodeFormat::Json)]
    pub format: DecodeFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenFormat {
    /// One summary line per event
    Text,
    /// One JSON object per event
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeFormat {
    /// Presentation document as JSON
    Json,
    /// Presentation document as YAML
    Yaml,
    /// Every decoded field, unconverted, as JSON
    Raw,
}
