//! Flat, ordered key/value rendering of a decoded packet.
//!
//! Keys are camelCase accessor names; values are the presentation form of each
//! accessor (rounded integers, labels, truncated fuel) rendered as strings.
//! Order is stable so dashboards and snapshot tests can diff output line by line.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::corners::Corners;
use crate::derived::TemperatureUnit;
use crate::packet::ForzaTelemetry;

const WHEEL_SUFFIXES: [&str; 4] = ["FrontLeft", "FrontRight", "RearLeft", "RearRight"];

/// Ordered string map produced by [`ForzaTelemetry::to_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryDocument {
    entries: Vec<(String, String)>,
}

impl TelemetryDocument {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.entries.push((key.to_owned(), value.to_string()));
    }

    // f32 Debug keeps a trailing ".0" on whole numbers.
    fn push_float(&mut self, key: &str, value: f32) {
        self.entries.push((key.to_owned(), format!("{value:?}")));
    }

    fn push_corners<T: fmt::Display>(&mut self, prefix: &str, values: Corners<T>) {
        for (suffix, value) in WHEEL_SUFFIXES.into_iter().zip(values.to_array()) {
            self.entries
                .push((format!("{prefix}{suffix}"), value.to_string()));
        }
    }

    fn push_float_corners(&mut self, prefix: &str, values: Corners<f32>) {
        for (suffix, value) in WHEEL_SUFFIXES.into_iter().zip(values.to_array()) {
            self.entries
                .push((format!("{prefix}{suffix}"), format!("{value:?}")));
        }
    }
}

impl Serialize for TelemetryDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a TelemetryDocument {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl ForzaTelemetry {
    /// Presentation document with one entry per accessor.
    pub fn to_document(&self) -> TelemetryDocument {
        let mut doc = TelemetryDocument::default();

        doc.push("isRaceOn", self.is_race_on);
        doc.push("timeStampMS", self.timestamp_ms);
        doc.push("engineMaxRpm", self.engine_max_rpm_as_int());
        doc.push("engineIdleRpm", self.engine_idle_rpm_as_int());
        doc.push("currentEngineRpm", self.current_engine_rpm_as_int());

        let accel = self.acceleration_as_int();
        doc.push("accelerationX", accel.x);
        doc.push("accelerationY", accel.y);
        doc.push("accelerationZ", accel.z);
        let velocity = self.velocity_as_int();
        doc.push("velocityX", velocity.x);
        doc.push("velocityY", velocity.y);
        doc.push("velocityZ", velocity.z);
        doc.push("averageVelocity", self.average_velocity());
        let angular = self.angular_velocity_as_int();
        doc.push("angularVelocityX", angular.x);
        doc.push("angularVelocityY", angular.y);
        doc.push("angularVelocityZ", angular.z);

        doc.push("yaw", self.yaw_as_int());
        doc.push("pitch", self.pitch_as_int());
        doc.push("roll", self.roll_as_int());

        doc.push_corners(
            "normalizedSuspensionTravel",
            self.normalized_suspension_travel_as_int(),
        );
        doc.push_corners("tireSlipRatio", self.tire_slip_ratio_as_int());
        doc.push_corners("wheelRotationSpeed", self.wheel_rotation_speed_as_int());
        doc.push_corners("wheelOnRumbleStrip", self.wheel_on_rumble_strip);
        doc.push_float_corners("wheelInPuddleDepth", self.wheel_in_puddle_depth);
        doc.push_float_corners("surfaceRumble", self.surface_rumble);
        doc.push_corners("tireSlipAngle", self.tire_slip_angle_degrees());
        doc.push_corners("tireCombinedSlip", self.tire_combined_slip_as_int());
        doc.push_corners(
            "suspensionTravelMeters",
            self.suspension_travel_meters_as_int(),
        );

        doc.push("carClass", self.car_class_label());
        doc.push("carPerformanceIndex", self.car_performance_index);
        doc.push("drivetrainType", self.drivetrain_label());
        doc.push("numCylinders", self.num_cylinders);
        doc.push("carType", self.car_type_label());
        doc.push("objectHit", self.object_hit);
        doc.push("carOrdinal", self.ordinal);

        let position = self.position_as_int();
        doc.push("positionX", position.x);
        doc.push("positionY", position.y);
        doc.push("positionZ", position.z);

        doc.push("speedMps", self.speed_mps_as_int());
        doc.push("speedMph", self.speed_mph_as_int());
        doc.push("speedKph", self.speed_kph_as_int());
        doc.push("power", self.power_as_int());
        doc.push("horsepower", self.horsepower_as_int());
        doc.push("torque", self.torque_as_int());
        doc.push_corners("tireTemp", self.tire_temp_as_int(TemperatureUnit::Fahrenheit));
        doc.push("boost", self.boost_as_int());
        doc.push_float("fuel", self.fuel_percent());
        doc.push_float("distanceTraveled", self.distance_traveled);
        doc.push_float("bestLap", self.best_lap);
        doc.push_float("lastLap", self.last_lap);
        doc.push_float("currentLap", self.current_lap);
        doc.push_float("currentRaceTime", self.current_race_time);
        doc.push("lapNumber", self.lap_number);
        doc.push("racePosition", self.race_position);

        doc.push("accel", self.throttle_percent());
        doc.push("brake", self.brake_percent());
        doc.push("clutch", self.clutch_percent());
        doc.push("handbrake", self.handbrake_percent());
        doc.push("gear", self.gear);
        doc.push("steer", self.steer_percent());
        doc.push(
            "normalizedDrivingLine",
            self.normalized_driving_line_percent(),
        );
        doc.push(
            "normalizedAIBrakeDifference",
            self.normalized_ai_brake_difference_percent(),
        );

        doc.push_corners("tireWear", self.tire_wear_as_int());
        doc.push("trackID", self.track_id);

        doc
    }
}

/// Renders the presentation document as compact JSON.
impl fmt::Display for ForzaTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_document().to_json().map_err(|e| {
            tracing::warn!(error = %e, "Failed to render telemetry document");
            fmt::Error
        })?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_document_starts_and_ends_with_framing_keys() {
        let doc = ForzaTelemetry::default().to_document();
        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys.first(), Some(&"isRaceOn"));
        assert_eq!(keys.last(), Some(&"trackID"));
    }

    #[test]
    fn test_document_keys_are_unique() {
        let doc = ForzaTelemetry::default().to_document();
        let mut keys: Vec<&str> = doc.keys().collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_zero_record_values() {
        let doc = ForzaTelemetry::default().to_document();
        assert_eq!(doc.get("isRaceOn"), Some("false"));
        assert_eq!(doc.get("fuel"), Some("0.0"));
        assert_eq!(doc.get("carClass"), Some("D"));
        assert_eq!(doc.get("drivetrainType"), Some("FWD"));
        assert_eq!(doc.get("carType"), Some("Unknown (0)"));
        assert_eq!(doc.get("tireWearRearRight"), Some("0"));
        assert_eq!(doc.get("missing"), None);
    }

    #[test]
    fn test_display_is_json_object() -> TestResult {
        let t = ForzaTelemetry {
            is_race_on: true,
            lap_number: 3,
            ..Default::default()
        };
        let rendered = t.to_string();
        let value: serde_json::Value = serde_json::from_str(&rendered)?;
        assert_eq!(value["isRaceOn"], "true");
        assert_eq!(value["lapNumber"], "3");
        assert_eq!(rendered, t.to_document().to_json()?);
        Ok(())
    }
}
