//! Vehicle identity projected from a packet.

use serde::Serialize;

use crate::packet::ForzaTelemetry;

/// The per-car subset of a packet, passed along with vehicle-change events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub car_name: String,
    pub car_class: String,
    pub performance_index: i32,
    pub drivetrain: String,
    pub num_of_cylinders: i32,
    pub car_type: String,
    pub ordinal: i32,
}

impl From<&ForzaTelemetry> for VehicleSummary {
    fn from(t: &ForzaTelemetry) -> Self {
        Self {
            car_name: t.car_name().to_owned(),
            car_class: t.car_class_label().to_owned(),
            performance_index: t.car_performance_index,
            drivetrain: t.drivetrain_label().to_owned(),
            num_of_cylinders: t.num_cylinders,
            car_type: t.car_type_label().into_owned(),
            ordinal: t.ordinal,
        }
    }
}

impl ForzaTelemetry {
    pub fn vehicle(&self) -> VehicleSummary {
        VehicleSummary::from(self)
    }
}
