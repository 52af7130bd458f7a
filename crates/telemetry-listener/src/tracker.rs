//! Per-session state machine that turns decoded packets into events.

use std::net::SocketAddr;
use std::sync::Arc;

use forza_telemetry::ForzaTelemetry;
use tracing::{debug, info};

use crate::events::TelemetryEvent;

/// Connection, pause and current-vehicle state for one listener.
///
/// Events for a packet are produced in a fixed order: `Connected` (once),
/// then `GamePaused`/`GameUnpaused`, then `VehicleChanged`, then
/// `DataReceived`.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    connected: bool,
    paused: bool,
    last_ordinal: i32,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn last_ordinal(&self) -> i32 {
        self.last_ordinal
    }

    /// Advance the state machine with one decoded packet.
    pub fn observe(
        &mut self,
        telemetry: Arc<ForzaTelemetry>,
        peer: SocketAddr,
    ) -> Vec<TelemetryEvent> {
        let mut events = Vec::new();

        if !self.connected && telemetry.timestamp_ms != 0 {
            // Adopt the first car so it does not count as a change.
            self.last_ordinal = telemetry.ordinal;
            self.connected = true;
            info!(
                %peer,
                format = %telemetry.format,
                ordinal = telemetry.ordinal,
                race_on = telemetry.is_race_on,
                "Forza telemetry connected"
            );
            events.push(TelemetryEvent::Connected {
                telemetry: telemetry.is_race_on.then(|| Arc::clone(&telemetry)),
                peer,
            });
        }

        if !telemetry.is_race_on && !self.paused {
            self.paused = true;
            debug!("Forza game paused");
            events.push(TelemetryEvent::GamePaused);
        } else if telemetry.is_race_on && self.paused {
            self.paused = false;
            debug!("Forza game unpaused");
            events.push(TelemetryEvent::GameUnpaused);
        }

        if self.paused {
            return events;
        }

        if telemetry.ordinal != self.last_ordinal {
            self.last_ordinal = telemetry.ordinal;
            let vehicle = telemetry.vehicle();
            info!(
                ordinal = vehicle.ordinal,
                class = %vehicle.car_class,
                performance_index = vehicle.performance_index,
                "Forza vehicle changed"
            );
            events.push(TelemetryEvent::VehicleChanged {
                telemetry: Arc::clone(&telemetry),
                vehicle,
            });
        }

        events.push(TelemetryEvent::DataReceived(telemetry));
        events
    }
}
