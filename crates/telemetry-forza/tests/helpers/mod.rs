//! Packet fixtures shared by the integration tests.
//!
//! Offsets are for the layouts without the Horizon vehicle block. Fields
//! after the classification ints sit 12 bytes later on Horizon; use
//! [`PacketBuilder::shared`] for those.

use forza_telemetry::HORIZON_PACKET_LENGTH;

pub const OFF_IS_RACE_ON: usize = 0;
pub const OFF_TIMESTAMP: usize = 4;
pub const OFF_ENGINE_MAX_RPM: usize = 8;
pub const OFF_ENGINE_IDLE_RPM: usize = 12;
pub const OFF_CURRENT_RPM: usize = 16;
pub const OFF_ACCEL: usize = 20;
pub const OFF_VELOCITY: usize = 32;
pub const OFF_ANGULAR_VELOCITY: usize = 44;
pub const OFF_YAW: usize = 56;
pub const OFF_PITCH: usize = 60;
pub const OFF_ROLL: usize = 64;
pub const OFF_SUSPENSION_TRAVEL: usize = 68;
pub const OFF_SLIP_RATIO: usize = 84;
pub const OFF_WHEEL_SPEED: usize = 100;
pub const OFF_RUMBLE_STRIP: usize = 116;
pub const OFF_PUDDLE_DEPTH: usize = 132;
pub const OFF_SURFACE_RUMBLE: usize = 148;
pub const OFF_SLIP_ANGLE: usize = 164;
pub const OFF_COMBINED_SLIP: usize = 180;
pub const OFF_SUSPENSION_METERS: usize = 196;
pub const OFF_ORDINAL: usize = 212;
pub const OFF_CAR_CLASS: usize = 216;
pub const OFF_PERFORMANCE_INDEX: usize = 220;
pub const OFF_DRIVETRAIN: usize = 224;
pub const OFF_CYLINDERS: usize = 228;

/// Horizon vehicle block.
pub const OFF_CAR_TYPE: usize = 232;
pub const OFF_OBJECT_HIT: usize = 236;
pub const HORIZON_SHIFT: usize = 12;

pub const OFF_POSITION: usize = 232;
pub const OFF_SPEED: usize = 244;
pub const OFF_POWER: usize = 248;
pub const OFF_TORQUE: usize = 252;
pub const OFF_TIRE_TEMP: usize = 256;
pub const OFF_BOOST: usize = 272;
pub const OFF_FUEL: usize = 276;
pub const OFF_DISTANCE: usize = 280;
pub const OFF_BEST_LAP: usize = 284;
pub const OFF_LAST_LAP: usize = 288;
pub const OFF_CURRENT_LAP: usize = 292;
pub const OFF_RACE_TIME: usize = 296;
pub const OFF_LAP_NUMBER: usize = 300;
pub const OFF_RACE_POSITION: usize = 302;
pub const OFF_INPUTS: usize = 303;

/// Motorsport tail.
pub const OFF_TIRE_WEAR: usize = 311;
pub const OFF_TRACK_ID: usize = 327;

/// Writes little-endian fields into a zeroed datagram.
pub struct PacketBuilder {
    buf: Vec<u8>,
    shift: usize,
}

impl PacketBuilder {
    pub fn new(len: usize) -> Self {
        let shift = if len == HORIZON_PACKET_LENGTH {
            HORIZON_SHIFT
        } else {
            0
        };
        Self {
            buf: vec![0u8; len],
            shift,
        }
    }

    /// Offset of a field that follows the vehicle block.
    pub fn shared(&self, offset: usize) -> usize {
        offset + self.shift
    }

    pub fn bytes(mut self, offset: usize, bytes: &[u8]) -> Self {
        if let Some(slot) = self.buf.get_mut(offset..offset + bytes.len()) {
            slot.copy_from_slice(bytes);
        }
        self
    }

    pub fn i32(self, offset: usize, value: i32) -> Self {
        self.bytes(offset, &value.to_le_bytes())
    }

    pub fn u32(self, offset: usize, value: u32) -> Self {
        self.bytes(offset, &value.to_le_bytes())
    }

    pub fn f32(self, offset: usize, value: f32) -> Self {
        self.bytes(offset, &value.to_le_bytes())
    }

    pub fn f32s(self, offset: usize, values: &[f32]) -> Self {
        let raw: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.bytes(offset, &raw)
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

/// Every field set to a distinct, non-zero value.
pub fn full_fixture(len: usize) -> Vec<u8> {
    let b = PacketBuilder::new(len);
    let at = |offset| b.shared(offset);
    let (position, speed, power, torque, tire_temp) = (
        at(OFF_POSITION),
        at(OFF_SPEED),
        at(OFF_POWER),
        at(OFF_TORQUE),
        at(OFF_TIRE_TEMP),
    );
    let (boost, fuel, distance, best, last, current, race_time) = (
        at(OFF_BOOST),
        at(OFF_FUEL),
        at(OFF_DISTANCE),
        at(OFF_BEST_LAP),
        at(OFF_LAST_LAP),
        at(OFF_CURRENT_LAP),
        at(OFF_RACE_TIME),
    );
    let (lap, race_position, inputs) = (
        at(OFF_LAP_NUMBER),
        at(OFF_RACE_POSITION),
        at(OFF_INPUTS),
    );

    b.i32(OFF_IS_RACE_ON, 1)
        .u32(OFF_TIMESTAMP, 123_456)
        .f32(OFF_ENGINE_MAX_RPM, 9000.0)
        .f32(OFF_ENGINE_IDLE_RPM, 800.0)
        .f32(OFF_CURRENT_RPM, 6500.5)
        .f32s(OFF_ACCEL, &[1.5, -2.25, 0.125])
        .f32s(OFF_VELOCITY, &[3.0, 0.0, 4.0])
        .f32s(OFF_ANGULAR_VELOCITY, &[0.1, 0.2, 0.3])
        .f32(OFF_YAW, 1.25)
        .f32(OFF_PITCH, -0.5)
        .f32(OFF_ROLL, 0.0625)
        .f32s(OFF_SUSPENSION_TRAVEL, &[0.1, 0.2, 0.3, 0.4])
        .f32s(OFF_SLIP_RATIO, &[0.01, 0.02, 0.03, 0.04])
        .f32s(OFF_WHEEL_SPEED, &[50.0, 51.0, 52.0, 53.0])
        .i32(OFF_RUMBLE_STRIP, 1)
        .i32(OFF_RUMBLE_STRIP + 12, 1)
        .f32s(OFF_PUDDLE_DEPTH, &[0.0, 0.25, 0.5, 0.75])
        .f32s(OFF_SURFACE_RUMBLE, &[0.1, 0.0, 0.0, 0.2])
        .f32s(OFF_SLIP_ANGLE, &[std::f32::consts::FRAC_PI_2, 0.0, 0.0, -0.1])
        .f32s(OFF_COMBINED_SLIP, &[0.2, 0.3, 0.4, 0.5])
        .f32s(OFF_SUSPENSION_METERS, &[0.05, 0.06, 0.07, 0.08])
        .i32(OFF_ORDINAL, 2352)
        .i32(OFF_CAR_CLASS, 4)
        .i32(OFF_PERFORMANCE_INDEX, 850)
        .i32(OFF_DRIVETRAIN, 2)
        .i32(OFF_CYLINDERS, 8)
        .i32(OFF_CAR_TYPE, 13)
        .bytes(OFF_OBJECT_HIT, &0x0102_0304_0506_0708i64.to_le_bytes())
        .f32s(position, &[100.5, 20.25, -300.75])
        .f32(speed, 27.78)
        .f32(power, 745_700.0)
        .f32(torque, 500.0)
        .f32s(tire_temp, &[180.0, 190.0, 200.0, 211.0])
        .f32(boost, 14.5)
        .f32(fuel, 0.567)
        .f32(distance, 1234.5)
        .f32(best, 95.5)
        .f32(last, 96.25)
        .f32(current, 30.125)
        .f32(race_time, 400.0)
        .bytes(lap, &7u16.to_le_bytes())
        .bytes(race_position, &[3])
        .bytes(inputs, &[255, 128, 0, 64, 4, 127, 64, 200])
        .f32s(OFF_TIRE_WEAR, &[0.1, 0.2, 0.3, 0.4])
        .i32(OFF_TRACK_ID, 860)
        .build()
}

/// Bit-exact float comparison for values copied straight off the wire.
pub fn same(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits()
}
