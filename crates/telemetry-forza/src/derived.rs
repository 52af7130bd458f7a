//! Derived views over a decoded [`ForzaTelemetry`].
//!
//! Everything here is a pure function of the stored wire values and is
//! recomputed on every call. Two presentation conventions exist for the same
//! quantities, and consumers rely on both:
//!
//! - `*_as_int`: scaled, then rounded half-up to an integer;
//! - `*_as_float`: scaled, unrounded.
//!
//! Rounding matches the dashboards this record feeds: half-up, so `x.5`
//! goes toward positive infinity. NaN maps to 0 and out-of-range values
//! saturate.

use std::borrow::Cow;
use std::f64::consts::PI;

use crate::corners::{Corners, TireGroup, Vec3};
use crate::labels::{self, CarClass, Drivetrain, UNKNOWN_LABEL};
use crate::packet::ForzaTelemetry;

pub const MPS_TO_KPH: f32 = 3.6;
pub const MPS_TO_MPH: f32 = 2.236_94;
pub const WATTS_TO_HP: f32 = 0.001_341_02;

const PERCENT: f32 = 100.0;
const MILLI: f32 = 1000.0;
/// Divisor for full-range driver inputs (throttle, brake, clutch, handbrake).
const FULL_RANGE: u32 = 255;
/// Divisor for half-range driver inputs (steer, driving line, AI brake difference).
const HALF_RANGE: u32 = 127;

/// Placeholder until a car-name table exists.
pub const UNKNOWN_CAR_NAME: &str = "Unknown";

/// Unit for tire temperature views. The wire value is Fahrenheit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn from_fahrenheit(self, value: f32) -> f32 {
        match self {
            Self::Fahrenheit => value,
            Self::Celsius => (value - 32.0) * 5.0 / 9.0,
        }
    }
}

/// Round half-up to `i32`. NaN maps to 0, out-of-range values saturate.
///
/// `value - floor(value)` is exact, so neither the 0.5 boundary nor values
/// above 2^23 pick up error from an intermediate addition.
pub fn round_half_up(value: f32) -> i32 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        (floor + 1.0) as i32
    } else {
        floor as i32
    }
}

/// Radians to whole degrees, rounded half-up.
pub fn radians_to_degrees(radians: f32) -> i64 {
    let degrees = f64::from(radians) * 180.0 / PI;
    let floor = degrees.floor();
    if degrees - floor >= 0.5 {
        (floor + 1.0) as i64
    } else {
        floor as i64
    }
}

/// Slack, in hundredths, added before truncation. Absorbs the f32 error of
/// `fuel * 100` so that 0.567 (56.699997 after scaling) reads 56.70.
const TRUNCATION_SLACK: f64 = 1e-3;

/// Truncate toward zero at two decimal places.
pub fn truncate_2dp(value: f32) -> f32 {
    let hundredths = f64::from(value) * 100.0;
    let slack = TRUNCATION_SLACK.copysign(hundredths);
    ((hundredths + slack).trunc() / 100.0) as f32
}

/// Scaling helpers shared by scalar, triple and per-wheel fields.
pub trait Scaled: Copy {
    type Rounded;

    fn scaled(self, factor: f32) -> Self;

    fn scaled_rounded(self, factor: f32) -> Self::Rounded;
}

impl Scaled for f32 {
    type Rounded = i32;

    fn scaled(self, factor: f32) -> Self {
        self * factor
    }

    fn scaled_rounded(self, factor: f32) -> i32 {
        round_half_up(self * factor)
    }
}

impl Scaled for Vec3<f32> {
    type Rounded = Vec3<i32>;

    fn scaled(self, factor: f32) -> Self {
        self.map(|v| v * factor)
    }

    fn scaled_rounded(self, factor: f32) -> Vec3<i32> {
        self.map(|v| round_half_up(v * factor))
    }
}

impl Scaled for Corners<f32> {
    type Rounded = Corners<i32>;

    fn scaled(self, factor: f32) -> Self {
        self.map(|v| v * factor)
    }

    fn scaled_rounded(self, factor: f32) -> Corners<i32> {
        self.map(|v| round_half_up(v * factor))
    }
}

/// Generates the `_as_int` / `_as_float` pair for a ×100 view of a field.
macro_rules! percent_views {
    ($($field:ident: $float:ty => $int:ty, $as_int:ident, $as_float:ident;)+) => {
        $(
            pub fn $as_int(&self) -> $int {
                self.$field.scaled_rounded(PERCENT)
            }

            pub fn $as_float(&self) -> $float {
                self.$field.scaled(PERCENT)
            }
        )+
    };
}

fn input_percent(raw: u8, divisor: u32) -> u32 {
    u32::from(raw) * 100 / divisor
}

impl ForzaTelemetry {
    percent_views! {
        acceleration: Vec3<f32> => Vec3<i32>, acceleration_as_int, acceleration_as_float;
        velocity: Vec3<f32> => Vec3<i32>, velocity_as_int, velocity_as_float;
        angular_velocity: Vec3<f32> => Vec3<i32>, angular_velocity_as_int, angular_velocity_as_float;
        yaw: f32 => i32, yaw_as_int, yaw_as_float;
        pitch: f32 => i32, pitch_as_int, pitch_as_float;
        roll: f32 => i32, roll_as_int, roll_as_float;
        normalized_suspension_travel: Corners<f32> => Corners<i32>,
            normalized_suspension_travel_as_int, normalized_suspension_travel_as_float;
        tire_slip_ratio: Corners<f32> => Corners<i32>, tire_slip_ratio_as_int, tire_slip_ratio_as_float;
        wheel_rotation_speed: Corners<f32> => Corners<i32>,
            wheel_rotation_speed_as_int, wheel_rotation_speed_as_float;
        tire_combined_slip: Corners<f32> => Corners<i32>,
            tire_combined_slip_as_int, tire_combined_slip_as_float;
        suspension_travel_meters: Corners<f32> => Corners<i32>,
            suspension_travel_meters_as_int, suspension_travel_meters_as_float;
        tire_wear: Corners<f32> => Corners<i32>, tire_wear_as_int, tire_wear_as_float;
    }

    pub fn engine_max_rpm_as_int(&self) -> i32 {
        round_half_up(self.engine_max_rpm)
    }

    pub fn engine_idle_rpm_as_int(&self) -> i32 {
        round_half_up(self.engine_idle_rpm)
    }

    pub fn current_engine_rpm_as_int(&self) -> i32 {
        round_half_up(self.current_engine_rpm)
    }

    /// Magnitude of the ×100 integer velocity components, rounded.
    pub fn average_velocity(&self) -> i32 {
        let v = self.velocity_as_int().map(|c| c as f32);
        round_half_up(v.magnitude())
    }

    /// Slip angles in whole degrees.
    pub fn tire_slip_angle_degrees(&self) -> Corners<i64> {
        self.tire_slip_angle.map(radians_to_degrees)
    }

    pub fn tire_slip_angle_degrees_as_float(&self) -> Corners<f32> {
        self.tire_slip_angle.map(|rad| rad.to_degrees())
    }

    /// World position in millimetres.
    pub fn position_as_int(&self) -> Vec3<i32> {
        self.position.scaled_rounded(MILLI)
    }

    pub fn speed_mps_as_int(&self) -> i32 {
        round_half_up(self.speed)
    }

    pub fn speed_kph_as_int(&self) -> i32 {
        round_half_up(self.speed * MPS_TO_KPH)
    }

    pub fn speed_kph_as_float(&self) -> f32 {
        self.speed * MPS_TO_KPH
    }

    pub fn speed_mph_as_int(&self) -> i32 {
        round_half_up(self.speed * MPS_TO_MPH)
    }

    pub fn speed_mph_as_float(&self) -> f32 {
        self.speed * MPS_TO_MPH
    }

    pub fn power_as_int(&self) -> i32 {
        round_half_up(self.power)
    }

    pub fn horsepower_as_int(&self) -> i32 {
        round_half_up(self.horsepower_as_float())
    }

    pub fn horsepower_as_float(&self) -> f32 {
        self.power * WATTS_TO_HP
    }

    pub fn torque_as_int(&self) -> i32 {
        round_half_up(self.torque)
    }

    pub fn boost_as_int(&self) -> i32 {
        round_half_up(self.boost)
    }

    /// Per-wheel tire temperature, rounded.
    pub fn tire_temp_as_int(&self, unit: TemperatureUnit) -> Corners<i32> {
        self.tire_temp
            .map(|f| round_half_up(unit.from_fahrenheit(f)))
    }

    /// Average of the rounded per-wheel Fahrenheit readings in `group`,
    /// converted to `unit` and rounded again.
    pub fn tire_temp_average(&self, group: TireGroup, unit: TemperatureUnit) -> i32 {
        let rounded = self.tire_temp_as_int(TemperatureUnit::Fahrenheit);
        let avg = rounded.map(|v| v as f32).average(group);
        round_half_up(unit.from_fahrenheit(avg))
    }

    pub fn tire_temp_average_as_float(&self, group: TireGroup, unit: TemperatureUnit) -> f32 {
        unit.from_fahrenheit(self.tire_temp.average(group))
    }

    /// Fuel level in percent, truncated to two decimals.
    pub fn fuel_percent(&self) -> f32 {
        truncate_2dp(self.fuel * PERCENT)
    }

    pub fn fuel_as_float(&self) -> f32 {
        self.fuel * PERCENT
    }

    pub fn throttle_percent(&self) -> u32 {
        input_percent(self.throttle, FULL_RANGE)
    }

    pub fn brake_percent(&self) -> u32 {
        input_percent(self.brake, FULL_RANGE)
    }

    pub fn clutch_percent(&self) -> u32 {
        input_percent(self.clutch, FULL_RANGE)
    }

    pub fn handbrake_percent(&self) -> u32 {
        input_percent(self.handbrake, FULL_RANGE)
    }

    /// Steer byte over the half range. Left lock wraps above 100.
    pub fn steer_percent(&self) -> u32 {
        input_percent(self.steer, HALF_RANGE)
    }

    pub fn normalized_driving_line_percent(&self) -> u32 {
        input_percent(self.normalized_driving_line, HALF_RANGE)
    }

    pub fn normalized_ai_brake_difference_percent(&self) -> u32 {
        input_percent(self.normalized_ai_brake_difference, HALF_RANGE)
    }

    /// Steer as a signed fraction in [-1.0, 1.0].
    pub fn steer_signed(&self) -> f32 {
        let raw = i8::from_le_bytes([self.steer]);
        (f32::from(raw) / HALF_RANGE as f32).clamp(-1.0, 1.0)
    }

    pub fn car_class_label(&self) -> &'static str {
        CarClass::from_code(self.car_class)
            .map(|class| class.label(self.format))
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn drivetrain_label(&self) -> &'static str {
        Drivetrain::from_code(self.drivetrain_type)
            .map(Drivetrain::label)
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn car_type_label(&self) -> Cow<'static, str> {
        labels::car_type_label(self.car_type)
    }

    pub fn car_name(&self) -> &'static str {
        UNKNOWN_CAR_NAME
    }
}
