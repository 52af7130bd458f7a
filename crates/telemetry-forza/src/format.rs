//! Wire-format detection by datagram length.

use serde::Serialize;

/// Motorsport 7 "Dash" packet: Sled (232) + dashboard block (79).
pub const MOTORSPORT_LEGACY_PACKET_LENGTH: usize = 311;
/// Horizon 4/5 packet: Dash layout with a 12-byte vehicle block after the
/// classification ints, plus one trailing byte.
pub const HORIZON_PACKET_LENGTH: usize = 324;
/// Motorsport (2023) packet: Dash layout plus tire wear and track id.
pub const MOTORSPORT_PACKET_LENGTH: usize = 331;

/// Largest recognized datagram.
pub const MAX_RECOGNIZED_PACKET_LENGTH: usize = MOTORSPORT_PACKET_LENGTH;

/// The wire-format variant a datagram belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketFormat {
    /// 311 bytes.
    MotorsportLegacy,
    /// 324 bytes.
    Horizon,
    /// 331 bytes.
    Motorsport,
    /// Any other length. Decoded with the shared layout only.
    #[default]
    Unrecognized,
}

impl PacketFormat {
    /// Classify a datagram by its exact received length.
    pub fn detect(len: usize) -> Self {
        match len {
            MOTORSPORT_LEGACY_PACKET_LENGTH => Self::MotorsportLegacy,
            HORIZON_PACKET_LENGTH => Self::Horizon,
            MOTORSPORT_PACKET_LENGTH => Self::Motorsport,
            _ => Self::Unrecognized,
        }
    }

    /// Whether the Horizon-only vehicle block (car type, object hit) is on the wire.
    pub fn has_vehicle_block(self) -> bool {
        matches!(self, Self::Horizon)
    }

    /// Whether the Motorsport-only tail (tire wear, track id) is on the wire.
    pub fn has_motorsport_tail(self) -> bool {
        matches!(self, Self::MotorsportLegacy | Self::Motorsport)
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Expected datagram length, if recognized.
    pub fn expected_len(self) -> Option<usize> {
        match self {
            Self::MotorsportLegacy => Some(MOTORSPORT_LEGACY_PACKET_LENGTH),
            Self::Horizon => Some(HORIZON_PACKET_LENGTH),
            Self::Motorsport => Some(MOTORSPORT_PACKET_LENGTH),
            Self::Unrecognized => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MotorsportLegacy => "motorsport_legacy",
            Self::Horizon => "horizon",
            Self::Motorsport => "motorsport",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for PacketFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
