//! Forza Motorsport and Forza Horizon "Data Out" packet decoding.
//!
//! The simulator streams a fixed-offset, little-endian UDP record. Three
//! variants exist and are told apart only by datagram length:
//!
//! - 311 bytes: Forza Motorsport 7 ("Dash")
//! - 324 bytes: Forza Horizon 4/5
//! - 331 bytes: Forza Motorsport (2023)
//!
//! ## Modules
//! - `reader` - lenient little-endian field reader
//! - `format` - length-based variant detection
//! - `packet` - the [`ForzaTelemetry`] record and its single-pass decoder
//! - `derived` - unit conversions, percentages, averages
//! - `labels` - car class, drivetrain and car-type tables
//! - `document` - ordered string document for JSON/YAML output
//! - `vehicle` - per-car summary
//!
//! Decoding is total: truncated or unknown-length input yields a record with
//! zeroed fields and a `tracing` warning, never an error.

#![deny(static_mut_refs)]

pub mod corners;
pub mod derived;
pub mod document;
pub mod format;
pub mod labels;
pub mod packet;
pub mod reader;
pub mod vehicle;

pub use corners::{Corners, TireGroup, Vec3};
pub use derived::{Scaled, TemperatureUnit, round_half_up};
pub use document::TelemetryDocument;
pub use format::{
    HORIZON_PACKET_LENGTH, MAX_RECOGNIZED_PACKET_LENGTH, MOTORSPORT_LEGACY_PACKET_LENGTH,
    MOTORSPORT_PACKET_LENGTH, PacketFormat,
};
pub use labels::{CarClass, Drivetrain};
pub use packet::{ForzaTelemetry, decode};
pub use reader::FieldReader;
pub use vehicle::VehicleSummary;
