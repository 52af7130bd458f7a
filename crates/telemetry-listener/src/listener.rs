//! Tokio UDP listener for the Forza "Data Out" stream.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use forza_telemetry::ForzaTelemetry;
use parking_lot::Mutex;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::ListenerConfig;
use crate::error::ListenerError;
use crate::events::TelemetryEvent;
use crate::source::{EventReceiver, TelemetrySource};
use crate::tracker::SessionTracker;

pub const SOURCE_ID: &str = "forza";

/// Receives Forza datagrams on one UDP socket and emits [`TelemetryEvent`]s.
pub struct ForzaTelemetryListener {
    config: ListenerConfig,
    task: Mutex<Option<JoinHandle<()>>>,
    local_addr: Mutex<Option<SocketAddr>>,
}

impl Default for ForzaTelemetryListener {
    fn default() -> Self {
        Self::new()
    }
}

impl ForzaTelemetryListener {
    pub fn new() -> Self {
        Self {
            config: ListenerConfig::default(),
            task: Mutex::new(None),
            local_addr: Mutex::new(None),
        }
    }

    /// Build a listener from validated settings.
    pub fn from_config(config: ListenerConfig) -> Result<Self, ListenerError> {
        config.validate()?;
        Ok(Self {
            config,
            task: Mutex::new(None),
            local_addr: Mutex::new(None),
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn with_bind_address(mut self, address: IpAddr) -> Self {
        self.config.bind_address = address;
        self
    }

    pub fn config(&self) -> &ListenerConfig {
        &self.config
    }

    /// Address the socket is bound to while running. Resolves port 0.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        *self.local_addr.lock()
    }

    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ForzaTelemetryListener {
    fn drop(&mut self) {
        if let Some(handle) = self.task.get_mut().take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl TelemetrySource for ForzaTelemetryListener {
    fn source_id(&self) -> &str {
        SOURCE_ID
    }

    async fn start_monitoring(&self) -> Result<EventReceiver> {
        if self.is_running() {
            return Err(ListenerError::AlreadyRunning.into());
        }

        let addr = self.config.socket_addr();
        let socket = UdpSocket::bind(addr).await.map_err(|source| {
            warn!(%addr, error = %source, "Failed to bind Forza UDP socket");
            ListenerError::Bind { addr, source }
        })?;
        let local = socket.local_addr().map_err(ListenerError::Io)?;
        info!(%local, "Forza listener bound");

        let (tx, rx) = mpsc::channel(self.config.channel_capacity);
        let handle = tokio::spawn(receive_loop(
            socket,
            tx,
            self.config.max_packet_size,
            self.config.receive_timeout(),
        ));

        let mut slot = self.task.lock();
        if slot.as_ref().is_some_and(|existing| !existing.is_finished()) {
            handle.abort();
            return Err(ListenerError::AlreadyRunning.into());
        }
        *slot = Some(handle);
        *self.local_addr.lock() = Some(local);
        Ok(rx)
    }

    async fn stop_monitoring(&self) -> Result<()> {
        let handle = self.task.lock().take();
        if let Some(handle) = handle {
            handle.abort();
            info!("Stopped Forza telemetry listener");
        }
        *self.local_addr.lock() = None;
        Ok(())
    }

    fn decode(&self, raw: &[u8]) -> ForzaTelemetry {
        ForzaTelemetry::from_datagram(raw)
    }

    fn expected_update_rate(&self) -> Duration {
        self.config.update_rate()
    }
}

async fn receive_loop(
    socket: UdpSocket,
    tx: mpsc::Sender<TelemetryEvent>,
    max_packet_size: usize,
    timeout: Duration,
) {
    let mut buf = vec![0u8; max_packet_size];
    let mut tracker = SessionTracker::new();

    loop {
        match tokio::time::timeout(timeout, socket.recv_from(&mut buf)).await {
            Ok(Ok((len, peer))) => {
                let telemetry = Arc::new(ForzaTelemetry::decode(len, &buf));
                for event in tracker.observe(telemetry, peer) {
                    if tx.send(event).await.is_err() {
                        debug!("Event receiver dropped, stopping Forza listener");
                        return;
                    }
                }
            }
            Ok(Err(e)) => warn!(error = %e, "Forza UDP receive error"),
            Err(_elapsed) => {
                if tx.is_closed() {
                    debug!("Event receiver dropped, stopping Forza listener");
                    return;
                }
                debug!(?timeout, "No Forza telemetry received (timeout)");
            }
        }
    }
}
