//! Property tests: decoding is total and variant gating holds for any bytes.

use forza_telemetry::{
    Corners, ForzaTelemetry, HORIZON_PACKET_LENGTH, MOTORSPORT_LEGACY_PACKET_LENGTH,
    MOTORSPORT_PACKET_LENGTH, PacketFormat,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_never_panics(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        length in 0usize..600,
    ) {
        let t = ForzaTelemetry::decode(length, &data);
        prop_assert_eq!(t.packet_length, length);
        prop_assert_eq!(t.format, PacketFormat::detect(length));
    }

    #[test]
    fn derived_views_never_panic(data in proptest::collection::vec(any::<u8>(), 331..=331)) {
        let t = ForzaTelemetry::from_datagram(&data);
        let _doc = t.to_document();
        let _vehicle = t.vehicle();
        let _ = t.fuel_percent();
        let _ = t.average_velocity();
        let _ = t.tire_slip_angle_degrees();
        let _ = t.steer_signed();
    }

    #[test]
    fn horizon_never_reads_motorsport_tail(
        data in proptest::collection::vec(any::<u8>(), HORIZON_PACKET_LENGTH..=HORIZON_PACKET_LENGTH)
    ) {
        let t = ForzaTelemetry::from_datagram(&data);
        prop_assert_eq!(t.tire_wear, Corners::default());
        prop_assert_eq!(t.track_id, 0);
    }

    #[test]
    fn motorsport_never_reads_vehicle_block(
        data in proptest::collection::vec(any::<u8>(), MOTORSPORT_PACKET_LENGTH..=MOTORSPORT_PACKET_LENGTH),
        legacy in any::<bool>(),
    ) {
        let length = if legacy { MOTORSPORT_LEGACY_PACKET_LENGTH } else { MOTORSPORT_PACKET_LENGTH };
        let t = ForzaTelemetry::decode(length, &data);
        prop_assert_eq!(t.car_type, 0);
        prop_assert_eq!(t.object_hit, 0);
        if legacy {
            prop_assert_eq!(t.track_id, 0);
        }
    }

    #[test]
    fn input_percentages_stay_in_range(raw in any::<u8>()) {
        let t = ForzaTelemetry { throttle: raw, steer: raw, ..Default::default() };
        prop_assert!(t.throttle_percent() <= 100);
        prop_assert!(t.steer_percent() <= 200);
        prop_assert!((-1.0..=1.0).contains(&t.steer_signed()));
    }

    #[test]
    fn fuel_percent_never_exceeds_scaled_value(fuel in 0.0f32..=1.0f32) {
        let t = ForzaTelemetry { fuel, ..Default::default() };
        prop_assert!(t.fuel_percent() <= t.fuel_as_float() + 0.001);
        prop_assert!(t.fuel_as_float() - t.fuel_percent() < 0.01 + 1e-4);
    }
}
