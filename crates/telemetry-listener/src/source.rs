//! Telemetry source abstraction.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use forza_telemetry::ForzaTelemetry;
use tokio::sync::mpsc;

use crate::events::TelemetryEvent;

pub type EventReceiver = mpsc::Receiver<TelemetryEvent>;

/// A producer of decoded telemetry events.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    fn source_id(&self) -> &str;

    /// Bind and start receiving. Events arrive on the returned channel until
    /// [`stop_monitoring`](Self::stop_monitoring) is called.
    async fn start_monitoring(&self) -> Result<EventReceiver>;

    async fn stop_monitoring(&self) -> Result<()>;

    /// Decode one datagram without any session state.
    fn decode(&self, raw: &[u8]) -> ForzaTelemetry;

    fn expected_update_rate(&self) -> Duration;
}
