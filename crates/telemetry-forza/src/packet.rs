//! The decoded telemetry record and the single-pass decoder that builds it.
//!
//! All variants share one field order. The layouts diverge at exactly two
//! points and reconverge afterwards:
//!
//! ```text
//! offset  field block                          311   324   331
//! 0       race flag, timestamp, engine rpm      x     x     x
//! 20      accel / velocity / angular velocity   x     x     x
//! 56      yaw, pitch, roll                      x     x     x
//! 68      per-wheel blocks (9 x 4 values)       x     x     x
//! 212     ordinal, class, PI, drivetrain, cyl   x     x     x
//! 232     car type (i32), object hit (i64)            x
//! ..      position .. race time                 x     x     x
//! ..      lap (u16), race position, 8 inputs    x     x     x
//! ..      tire wear (4 x f32), track id (i32)   x           x
//! ```
//!
//! The 311-byte layout ends after the driver inputs, so its Motorsport tail
//! always reads as zero through the lenient reader.

use serde::Serialize;
use tracing::{trace, warn};

use crate::corners::{Corners, Vec3};
use crate::format::PacketFormat;
use crate::reader::FieldReader;

/// One decoded Forza "Data Out" datagram.
///
/// Values are stored exactly as they appear on the wire; conversions live in
/// the accessor methods. Fields absent from the detected [`PacketFormat`] are
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForzaTelemetry {
    /// Received datagram length.
    pub packet_length: usize,
    pub format: PacketFormat,

    pub is_race_on: bool,
    /// Game timer in milliseconds. Wraps at `u32::MAX` on the wire.
    pub timestamp_ms: u64,

    pub engine_max_rpm: f32,
    pub engine_idle_rpm: f32,
    pub current_engine_rpm: f32,

    /// Car-local acceleration, m/s².
    pub acceleration: Vec3<f32>,
    /// Car-local velocity, m/s.
    pub velocity: Vec3<f32>,
    /// Car-local angular velocity, rad/s.
    pub angular_velocity: Vec3<f32>,

    /// Radians.
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,

    /// 0.0 = max stretch, 1.0 = max compression.
    pub normalized_suspension_travel: Corners<f32>,
    /// 0 = 100% grip, |ratio| > 1.0 = loss of grip.
    pub tire_slip_ratio: Corners<f32>,
    /// rad/s.
    pub wheel_rotation_speed: Corners<f32>,
    /// 1 when the wheel is on a rumble strip.
    pub wheel_on_rumble_strip: Corners<i32>,
    /// 0.0 to 1.0, 1.0 being the deepest puddle.
    pub wheel_in_puddle_depth: Corners<f32>,
    pub surface_rumble: Corners<f32>,
    /// Radians.
    pub tire_slip_angle: Corners<f32>,
    pub tire_combined_slip: Corners<f32>,
    pub suspension_travel_meters: Corners<f32>,

    /// Unique id of the car make/model.
    pub ordinal: i32,
    /// 0 (D) to 6 (X).
    pub car_class: i32,
    /// 100 to 999.
    pub car_performance_index: i32,
    /// 0 = FWD, 1 = RWD, 2 = AWD.
    pub drivetrain_type: i32,
    pub num_cylinders: i32,
    /// Horizon only.
    pub car_type: i32,
    /// Horizon only. Undocumented upstream; kept opaque.
    pub object_hit: i64,

    /// World position, metres.
    pub position: Vec3<f32>,
    /// m/s.
    pub speed: f32,
    /// Watts.
    pub power: f32,
    /// Newton metres.
    pub torque: f32,
    /// Fahrenheit.
    pub tire_temp: Corners<f32>,
    pub boost: f32,
    /// 0.0 to 1.0.
    pub fuel: f32,
    pub distance_traveled: f32,
    /// Seconds.
    pub best_lap: f32,
    pub last_lap: f32,
    pub current_lap: f32,
    pub current_race_time: f32,
    pub lap_number: u16,
    pub race_position: i8,

    pub throttle: u8,
    pub brake: u8,
    pub clutch: u8,
    pub handbrake: u8,
    pub gear: u8,
    pub steer: u8,
    pub normalized_driving_line: u8,
    pub normalized_ai_brake_difference: u8,

    /// Motorsport only. 0.0 to 1.0.
    pub tire_wear: Corners<f32>,
    /// Motorsport only.
    pub track_id: i32,
}

impl ForzaTelemetry {
    /// Decode a datagram whose received length is `length`.
    ///
    /// `buffer` may be a larger receive buffer; only the first `length` bytes
    /// are read. This never fails: short input leaves the unread fields at
    /// zero and an unrecognized length is decoded with the shared layout.
    pub fn decode(length: usize, buffer: &[u8]) -> Self {
        let format = PacketFormat::detect(length);
        if !format.is_recognized() {
            warn!(
                length,
                allocated = buffer.len(),
                "Unrecognized Forza packet length, decoding shared fields only"
            );
        }

        let valid = buffer.get(..length).unwrap_or(buffer);
        let mut r = FieldReader::new(valid);

        let is_race_on = r.read_i32() == 1;
        let timestamp_ms = u64::from(r.read_u32());
        let engine_max_rpm = r.read_f32();
        let engine_idle_rpm = r.read_f32();
        let current_engine_rpm = r.read_f32();

        let acceleration = read_vec3(&mut r);
        let velocity = read_vec3(&mut r);
        let angular_velocity = read_vec3(&mut r);

        let yaw = r.read_f32();
        let pitch = r.read_f32();
        let roll = r.read_f32();

        let normalized_suspension_travel = read_corners_f32(&mut r);
        let tire_slip_ratio = read_corners_f32(&mut r);
        let wheel_rotation_speed = read_corners_f32(&mut r);
        let wheel_on_rumble_strip =
            Corners::new(r.read_i32(), r.read_i32(), r.read_i32(), r.read_i32());
        let wheel_in_puddle_depth = read_corners_f32(&mut r);
        let surface_rumble = read_corners_f32(&mut r);
        let tire_slip_angle = read_corners_f32(&mut r);
        let tire_combined_slip = read_corners_f32(&mut r);
        let suspension_travel_meters = read_corners_f32(&mut r);

        let ordinal = r.read_i32();
        let car_class = r.read_i32();
        let car_performance_index = r.read_i32();
        let drivetrain_type = r.read_i32();
        let num_cylinders = r.read_i32();

        // First divergence point.
        let (car_type, object_hit) = if format.has_vehicle_block() {
            (r.read_i32(), r.read_i64())
        } else {
            (0, 0)
        };

        let position = read_vec3(&mut r);
        let speed = r.read_f32();
        let power = r.read_f32();
        let torque = r.read_f32();
        let tire_temp = read_corners_f32(&mut r);
        let boost = r.read_f32();
        let fuel = r.read_f32();
        let distance_traveled = r.read_f32();
        let best_lap = r.read_f32();
        let last_lap = r.read_f32();
        let current_lap = r.read_f32();
        let current_race_time = r.read_f32();
        let lap_number = r.read_u16();
        let race_position = r.read_i8();

        let throttle = r.read_u8();
        let brake = r.read_u8();
        let clutch = r.read_u8();
        let handbrake = r.read_u8();
        let gear = r.read_u8();
        let steer = r.read_u8();
        let normalized_driving_line = r.read_u8();
        let normalized_ai_brake_difference = r.read_u8();

        // Second divergence point.
        let (tire_wear, track_id) = if format.has_motorsport_tail() {
            (read_corners_f32(&mut r), r.read_i32())
        } else {
            (Corners::default(), 0)
        };

        trace!(
            %format,
            consumed = r.position(),
            trailing = r.remaining(),
            "Decoded Forza packet"
        );

        Self {
            packet_length: length,
            format,
            is_race_on,
            timestamp_ms,
            engine_max_rpm,
            engine_idle_rpm,
            current_engine_rpm,
            acceleration,
            velocity,
            angular_velocity,
            yaw,
            pitch,
            roll,
            normalized_suspension_travel,
            tire_slip_ratio,
            wheel_rotation_speed,
            wheel_on_rumble_strip,
            wheel_in_puddle_depth,
            surface_rumble,
            tire_slip_angle,
            tire_combined_slip,
            suspension_travel_meters,
            ordinal,
            car_class,
            car_performance_index,
            drivetrain_type,
            num_cylinders,
            car_type,
            object_hit,
            position,
            speed,
            power,
            torque,
            tire_temp,
            boost,
            fuel,
            distance_traveled,
            best_lap,
            last_lap,
            current_lap,
            current_race_time,
            lap_number,
            race_position,
            throttle,
            brake,
            clutch,
            handbrake,
            gear,
            steer,
            normalized_driving_line,
            normalized_ai_brake_difference,
            tire_wear,
            track_id,
        }
    }

    /// Decode a datagram that is exactly as long as `data`.
    pub fn from_datagram(data: &[u8]) -> Self {
        Self::decode(data.len(), data)
    }
}

/// Decode `buffer` as a datagram of `length` bytes.
pub fn decode(length: usize, buffer: &[u8]) -> ForzaTelemetry {
    ForzaTelemetry::decode(length, buffer)
}

fn read_vec3(r: &mut FieldReader<'_>) -> Vec3<f32> {
    Vec3::new(r.read_f32(), r.read_f32(), r.read_f32())
}

fn read_corners_f32(r: &mut FieldReader<'_>) -> Corners<f32> {
    Corners::new(r.read_f32(), r.read_f32(), r.read_f32(), r.read_f32())
}
