//! Live UDP listening.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use forza_telemetry::{ForzaTelemetry, TemperatureUnit, TireGroup, VehicleSummary};
use forza_telemetry_listener::{
    ForzaTelemetryListener, ListenerConfig, TelemetryHandler, TelemetrySource, run_handler,
};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::commands::{ListenArgs, ListenFormat};
use crate::error::CliError;

pub async fn execute(args: &ListenArgs) -> Result<()> {
    let config = load_config(args)?;
    let listener = ForzaTelemetryListener::from_config(config).map_err(CliError::from)?;

    let mut events = listener.start_monitoring().await?;
    if let Some(addr) = listener.local_addr() {
        eprintln!("Listening for Forza telemetry on {addr}");
    }

    let mut printer = EventPrinter::new(args.format);
    let limit = args.duration.map(Duration::from_secs);

    tokio::select! {
        dispatched = run_handler(&mut events, &mut printer) => {
            info!(dispatched, "Event stream ended");
        }
        () = wait_for_stop(limit) => {
            info!("Stopping listener");
        }
    }

    listener.stop_monitoring().await?;
    Ok(())
}

fn load_config(args: &ListenArgs) -> Result<ListenerConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => ListenerConfig::from_path(path)?,
        None => ListenerConfig::default(),
    };
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    Ok(config)
}

async fn wait_for_stop(limit: Option<Duration>) {
    match limit {
        Some(limit) => tokio::time::sleep(limit).await,
        None => {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to install Ctrl-C handler");
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Prints one line per listener event.
pub struct EventPrinter {
    format: ListenFormat,
}

impl EventPrinter {
    pub fn new(format: ListenFormat) -> Self {
        Self { format }
    }

    fn emit(&self, kind: &str, text: String, data: Value) {
        match self.format {
            ListenFormat::Text => println!("{text}"),
            ListenFormat::Json => println!("{}", json!({ "event": kind, "data": data })),
        }
    }

    pub fn data_line(telemetry: &ForzaTelemetry) -> String {
        format!(
            "lap {} pos {} | {} km/h | gear {} | {} rpm | throttle {}% brake {}% | tires {}°F",
            telemetry.lap_number,
            telemetry.race_position,
            telemetry.speed_kph_as_int(),
            telemetry.gear,
            telemetry.current_engine_rpm_as_int(),
            telemetry.throttle_percent(),
            telemetry.brake_percent(),
            telemetry.tire_temp_average(TireGroup::Total, TemperatureUnit::Fahrenheit),
        )
    }

    pub fn vehicle_line(vehicle: &VehicleSummary) -> String {
        format!(
            "Vehicle: {} [{} {}] {} {}-cyl {} (ordinal {})",
            vehicle.car_name,
            vehicle.car_class,
            vehicle.performance_index,
            vehicle.drivetrain,
            vehicle.num_of_cylinders,
            vehicle.car_type,
            vehicle.ordinal,
        )
    }
}

/// Event payload, or `null` with a warning when it cannot be serialized.
fn payload_or_null(kind: &str, payload: serde_json::Result<Value>) -> Value {
    payload.unwrap_or_else(|e| {
        warn!(event = kind, error = %e, "Failed to serialize event payload");
        Value::Null
    })
}

impl TelemetryHandler for EventPrinter {
    fn on_connected(&mut self, telemetry: Option<&ForzaTelemetry>, peer: SocketAddr) {
        let data = json!({
            "peer": peer.to_string(),
            "format": telemetry.map(|t| t.format.name()),
        });
        self.emit("connected", format!("Connected to {peer}"), data);
    }

    fn on_game_paused(&mut self) {
        self.emit("game_paused", "Game paused".to_owned(), Value::Null);
    }

    fn on_game_unpaused(&mut self) {
        self.emit("game_unpaused", "Game unpaused".to_owned(), Value::Null);
    }

    fn on_vehicle_changed(&mut self, _telemetry: &ForzaTelemetry, vehicle: &VehicleSummary) {
        let data = payload_or_null("vehicle_changed", serde_json::to_value(vehicle));
        self.emit("vehicle_changed", Self::vehicle_line(vehicle), data);
    }

    fn on_data_received(&mut self, telemetry: &ForzaTelemetry) {
        let data = payload_or_null("data_received", serde_json::to_value(telemetry.to_document()));
        self.emit("data_received", Self::data_line(telemetry), data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn args() -> ListenArgs {
        ListenArgs {
            config: None,
            port: None,
            bind: None,
            format: ListenFormat::Text,
            duration: None,
        }
    }

    #[test]
    fn test_overrides_apply_to_defaults() -> Result<(), CliError> {
        let config = load_config(&ListenArgs {
            port: Some(5301),
            bind: Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            ..args()
        })?;
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5301");
        Ok(())
    }

    #[test]
    fn test_missing_config_is_configuration_error() {
        let result = load_config(&ListenArgs {
            config: Some("/nonexistent/forza.yaml".into()),
            ..args()
        });
        assert!(matches!(result, Err(CliError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_payload_falls_back_to_null() {
        let broken = serde_json::from_str::<Value>("{");
        assert_eq!(payload_or_null("data_received", broken), Value::Null);

        let ok = serde_json::to_value(ForzaTelemetry::default().vehicle());
        let payload = payload_or_null("vehicle_changed", ok);
        assert_eq!(payload["carClass"], "D");
    }

    #[test]
    fn test_data_line() {
        let t = ForzaTelemetry {
            lap_number: 4,
            race_position: 2,
            speed: 10.0,
            gear: 3,
            throttle: 255,
            ..Default::default()
        };
        assert_eq!(
            EventPrinter::data_line(&t),
            "lap 4 pos 2 | 36 km/h | gear 3 | 0 rpm | throttle 100% brake 0% | tires 0°F"
        );
    }

    #[test]
    fn test_vehicle_line() {
        let v = ForzaTelemetry {
            car_class: 3,
            car_performance_index: 700,
            drivetrain_type: 2,
            num_cylinders: 6,
            ordinal: 42,
            ..Default::default()
        }
        .vehicle();
        assert_eq!(
            EventPrinter::vehicle_line(&v),
            "Vehicle: Unknown [A 700] AWD 6-cyl Unknown (0) (ordinal 42)"
        );
    }
}
