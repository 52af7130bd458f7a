//! UDP listener and event dispatch for Forza telemetry.
//!
//! [`ForzaTelemetryListener`] binds a UDP socket, decodes every datagram with
//! [`forza_telemetry`], and runs each record through a [`SessionTracker`]
//! that produces [`TelemetryEvent`]s: connected, paused/unpaused, vehicle
//! changed and data received. Events are delivered on a bounded channel, or
//! to a [`TelemetryHandler`] via [`run_handler`].

#![deny(static_mut_refs)]

pub mod config;
pub mod error;
pub mod events;
pub mod handler;
pub mod listener;
pub mod source;
pub mod tracker;

pub use config::{ConfigError, DEFAULT_FORZA_PORT, ListenerConfig};
pub use error::ListenerError;
pub use events::TelemetryEvent;
pub use handler::{TelemetryHandler, dispatch, run_handler};
pub use listener::ForzaTelemetryListener;
pub use source::{EventReceiver, TelemetrySource};
pub use tracker::SessionTracker;
