//! Decode a captured datagram from disk.

use anyhow::Result;
use forza_telemetry::ForzaTelemetry;
use tracing::info;

use crate::commands::{DecodeArgs, DecodeFormat};
use crate::error::CliError;

pub fn execute(args: &DecodeArgs) -> Result<()> {
    let data = std::fs::read(&args.file).map_err(|source| CliError::ReadFile {
        path: args.file.clone(),
        source,
    })?;
    let telemetry = ForzaTelemetry::from_datagram(&data);
    info!(
        bytes = data.len(),
        format = %telemetry.format,
        "Decoded {}",
        args.file.display()
    );

    println!("{}", render(&telemetry, args.format)?);
    Ok(())
}

pub fn render(telemetry: &ForzaTelemetry, format: DecodeFormat) -> Result<String, CliError> {
    let rendered = match format {
        DecodeFormat::Json => telemetry.to_document().to_json_pretty()?,
        DecodeFormat::Yaml => telemetry.to_document().to_yaml()?,
        DecodeFormat::Raw => serde_json::to_string_pretty(telemetry)?,
    };
    Ok(rendered.trim_end().to_owned())
}
