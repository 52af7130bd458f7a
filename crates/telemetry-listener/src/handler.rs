//! Callback-style consumption of listener events.

use std::net::SocketAddr;

use forza_telemetry::{ForzaTelemetry, VehicleSummary};
use tokio::sync::mpsc;
use tracing::debug;

use crate::events::TelemetryEvent;

/// Receives listener events as method calls. Every hook defaults to a no-op.
pub trait TelemetryHandler: Send {
    fn on_connected(&mut self, _telemetry: Option<&ForzaTelemetry>, _peer: SocketAddr) {}

    fn on_game_paused(&mut self) {}

    fn on_game_unpaused(&mut self) {}

    fn on_vehicle_changed(&mut self, _telemetry: &ForzaTelemetry, _vehicle: &VehicleSummary) {}

    fn on_data_received(&mut self, _telemetry: &ForzaTelemetry) {}
}

/// Route one event to the matching hook.
pub fn dispatch<H: TelemetryHandler + ?Sized>(handler: &mut H, event: &TelemetryEvent) {
    match event {
        TelemetryEvent::Connected { telemetry, peer } => {
            handler.on_connected(telemetry.as_deref(), *peer);
        }
        TelemetryEvent::GamePaused => handler.on_game_paused(),
        TelemetryEvent::GameUnpaused => handler.on_game_unpaused(),
        TelemetryEvent::VehicleChanged { telemetry, vehicle } => {
            handler.on_vehicle_changed(telemetry, vehicle);
        }
        TelemetryEvent::DataReceived(telemetry) => handler.on_data_received(telemetry),
    }
}

/// Drain `events` into `handler` until the sending side closes.
///
/// Returns the number of events dispatched.
pub async fn run_handler<H: TelemetryHandler + ?Sized>(
    events: &mut mpsc::Receiver<TelemetryEvent>,
    handler: &mut H,
) -> u64 {
    let mut dispatched = 0u64;
    while let Some(event) = events.recv().await {
        dispatch(handler, &event);
        dispatched = dispatched.saturating_add(1);
    }
    debug!(dispatched, "Forza event channel closed");
    dispatched
}
