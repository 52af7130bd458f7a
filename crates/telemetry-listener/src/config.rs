//! Listener settings, loadable from YAML.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use forza_telemetry::MAX_RECOGNIZED_PACKET_LENGTH;
use serde::{Deserialize, Serialize};

/// Default "Data Out" port configured in the game's HUD settings.
pub const DEFAULT_FORZA_PORT: u16 = 5300;
pub const DEFAULT_MAX_PACKET_SIZE: usize = 512;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;
/// The game sends at 60 Hz.
pub const DEFAULT_UPDATE_RATE_MS: u64 = 16;
/// Receive timeout, in update intervals.
const TIMEOUT_INTERVALS: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid listener config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("max_packet_size {actual} is smaller than the largest Forza packet ({min} bytes)")]
    PacketSizeTooSmall { actual: usize, min: usize },

    #[error("channel_capacity must be greater than zero")]
    ZeroChannelCapacity,

    #[error("update_rate_ms must be greater than zero")]
    ZeroUpdateRate,
}

/// UDP listener settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    /// Receive buffer size. Longer datagrams are truncated by the socket.
    pub max_packet_size: usize,
    pub channel_capacity: usize,
    pub update_rate_ms: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_FORZA_PORT,
            max_packet_size: DEFAULT_MAX_PACKET_SIZE,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            update_rate_ms: DEFAULT_UPDATE_RATE_MS,
        }
    }
}

impl ListenerConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_packet_size < MAX_RECOGNIZED_PACKET_LENGTH {
            return Err(ConfigError::PacketSizeTooSmall {
                actual: self.max_packet_size,
                min: MAX_RECOGNIZED_PACKET_LENGTH,
            });
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }
        if self.update_rate_ms == 0 {
            return Err(ConfigError::ZeroUpdateRate);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn update_rate(&self) -> Duration {
        Duration::from_millis(self.update_rate_ms)
    }

    /// How long the receive loop waits before logging a quiet interval.
    pub fn receive_timeout(&self) -> Duration {
        self.update_rate().saturating_mul(TIMEOUT_INTERVALS)
    }
}
