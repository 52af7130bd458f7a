//! Categorical code tables: car class, drivetrain and car type.

use std::borrow::Cow;

use crate::format::PacketFormat;

/// Performance class bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarClass {
    D,
    C,
    B,
    A,
    S1,
    S2,
    X,
}

impl CarClass {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::D),
            1 => Some(Self::C),
            2 => Some(Self::B),
            3 => Some(Self::A),
            4 => Some(Self::S1),
            5 => Some(Self::S2),
            6 => Some(Self::X),
            _ => None,
        }
    }

    /// Letter shown in game. Motorsport 7 names the two top classes S and R.
    pub fn label(self, format: PacketFormat) -> &'static str {
        let legacy = format == PacketFormat::MotorsportLegacy;
        match self {
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S1 if legacy => "S",
            Self::S1 => "S1",
            Self::S2 if legacy => "R",
            Self::S2 => "S2",
            Self::X => "X",
        }
    }
}

/// Driven axle layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drivetrain {
    Fwd,
    Rwd,
    Awd,
}

impl Drivetrain {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Fwd),
            1 => Some(Self::Rwd),
            2 => Some(Self::Awd),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fwd => "FWD",
            Self::Rwd => "RWD",
            Self::Awd => "AWD",
        }
    }
}

/// Placeholder for codes outside a table.
pub const UNKNOWN_LABEL: &str = "-";

/// Horizon car-type division names, keyed by wire code.
pub const CAR_TYPES: &[(i32, &str)] = &[
    (11, "Modern Super Cars"),
    (12, "Retro Super Cars"),
    (13, "Hyper Cars"),
    (14, "Retro Saloons"),
    (16, "Vans & Utility"),
    (17, "Retro Sports Cars"),
    (18, "Modern Sports Cars"),
    (19, "Super Saloons"),
    (20, "Classic Racers"),
    (21, "Cult Cars"),
    (22, "Rare Classics"),
    (25, "Super Hot Hatch"),
    (29, "Rods & Customs"),
    (30, "Retro Muscle"),
    (31, "Modern Muscle"),
    (32, "Retro Rally"),
    (33, "Classic Rally"),
    (34, "Rally Monsters"),
    (35, "Modern Rally"),
    (36, "GT Cars"),
    (37, "Super GT"),
    (38, "Extreme Offroad"),
    (39, "Sports Utility Heroes"),
    (40, "Offroad"),
    (41, "Offroad Buggies"),
    (42, "Classic Sports Cars"),
    (43, "Track Toys"),
    (44, "Vintage Racers"),
    (45, "Trucks"),
];

/// Car-type name, or `Unknown (<code>)`.
pub fn car_type_label(code: i32) -> Cow<'static, str> {
    CAR_TYPES
        .iter()
        .find(|(id, _)| *id == code)
        .map(|(_, name)| Cow::Borrowed(*name))
        .unwrap_or_else(|| Cow::Owned(format!("Unknown ({code})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_class_letters() {
        let expected = ["D", "C", "B", "A", "S1", "S2", "X"];
        for (code, letter) in (0..).zip(expected) {
            let class = CarClass::from_code(code);
            assert_eq!(class.map(|c| c.label(PacketFormat::Horizon)), Some(letter));
            assert_eq!(
                class.map(|c| c.label(PacketFormat::Motorsport)),
                Some(letter)
            );
        }
        assert_eq!(CarClass::from_code(7), None);
        assert_eq!(CarClass::from_code(-1), None);
    }

    #[test]
    fn test_legacy_top_classes() {
        let legacy = PacketFormat::MotorsportLegacy;
        assert_eq!(CarClass::S1.label(legacy), "S");
        assert_eq!(CarClass::S2.label(legacy), "R");
        assert_eq!(CarClass::A.label(legacy), "A");
        assert_eq!(CarClass::X.label(legacy), "X");
    }

    #[test]
    fn test_drivetrain() {
        assert_eq!(Drivetrain::from_code(0).map(Drivetrain::label), Some("FWD"));
        assert_eq!(Drivetrain::from_code(1).map(Drivetrain::label), Some("RWD"));
        assert_eq!(Drivetrain::from_code(2).map(Drivetrain::label), Some("AWD"));
        assert_eq!(Drivetrain::from_code(3), None);
    }

    #[test]
    fn test_car_type_table() {
        assert_eq!(car_type_label(11), "Modern Super Cars");
        assert_eq!(car_type_label(16), "Vans & Utility");
        assert_eq!(car_type_label(45), "Trucks");
        assert_eq!(car_type_label(15), "Unknown (15)");
        assert_eq!(car_type_label(0), "Unknown (0)");
    }

    #[test]
    fn test_car_type_ids_are_unique_and_sorted() {
        let ids: Vec<i32> = CAR_TYPES.iter().map(|(id, _)| *id).collect();
        assert!(ids.windows(2).all(|w| matches!(w, [a, b] if a < b)));
    }
}
