//! Events emitted by the listener, one or more per received datagram.

use std::net::SocketAddr;
use std::sync::Arc;

use forza_telemetry::{ForzaTelemetry, VehicleSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryEvent {
    /// First datagram with a non-zero timestamp. `telemetry` is `None` when
    /// the race is not running, since every value would read zero.
    Connected {
        telemetry: Option<Arc<ForzaTelemetry>>,
        peer: SocketAddr,
    },
    GamePaused,
    GameUnpaused,
    /// The car ordinal changed while the game was running.
    VehicleChanged {
        telemetry: Arc<ForzaTelemetry>,
        vehicle: VehicleSummary,
    },
    /// One per datagram received while the game is running.
    DataReceived(Arc<ForzaTelemetry>),
}

impl TelemetryEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::GamePaused => "game_paused",
            Self::GameUnpaused => "game_unpaused",
            Self::VehicleChanged { .. } => "vehicle_changed",
            Self::DataReceived(_) => "data_received",
        }
    }
}
