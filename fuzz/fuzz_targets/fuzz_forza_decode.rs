//! Fuzzes Forza datagram decoding and every derived view.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_forza_decode
#![no_main]
use forza_telemetry::{ForzaTelemetry, TemperatureUnit, TireGroup, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode; the claimed length may disagree with the buffer.
    let t = ForzaTelemetry::from_datagram(data);
    let doc = t.to_document();
    std::hint::black_box((doc.len(), t.vehicle(), t.to_string()));
    std::hint::black_box(t.tire_temp_average(TireGroup::Total, TemperatureUnit::Celsius));

    if let Some((&claimed, rest)) = data.split_first() {
        let length = usize::from(claimed).saturating_mul(2);
        std::hint::black_box(decode(length, rest).to_document());
    }
});
