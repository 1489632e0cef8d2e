//! Fire-and-forget usage telemetry.
//!
//! Events are pushed onto an unbounded channel and delivered by a background
//! task, so recording one never waits on the network and never fails. When no
//! endpoint is configured the sender is absent and events are dropped on the
//! spot.
//!
//! ```rust,no_run
//! use cabroster::libs::telemetry::{Telemetry, TelemetryEvent};
//!
//! # async fn run() {
//! let telemetry = Telemetry::spawn(None);
//! telemetry.record(TelemetryEvent::Visit);
//! telemetry.shutdown().await;
//! # }
//! ```

use super::config::TelemetryConfig;
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::Local;
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, UdpSocket};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Upper bound on how long `shutdown` waits for queued events.
const FLUSH_GRACE: Duration = Duration::from_secs(3);

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TelemetryEvent {
    Visit,
    Download,
}

impl fmt::Display for TelemetryEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TelemetryEvent::Visit => write!(f, "visit"),
            TelemetryEvent::Download => write!(f, "download"),
        }
    }
}

#[derive(Serialize, Debug)]
struct TelemetryPayload {
    event: TelemetryEvent,
    ip: Option<IpAddr>,
    app: &'static str,
    version: &'static str,
    timestamp: String,
}

pub struct Telemetry {
    sender: Option<mpsc::UnboundedSender<TelemetryEvent>>,
    worker: Option<JoinHandle<()>>,
}

impl Telemetry {
    /// Starts the delivery task. Must be called inside a tokio runtime.
    ///
    /// Falls back to the endpoint baked in at build time when `config` is
    /// `None`; with neither, the returned handle discards every event.
    pub fn spawn(config: Option<TelemetryConfig>) -> Self {
        let config = config.or_else(|| {
            (!APP_METADATA_TELEMETRY_URL.is_empty()).then(|| TelemetryConfig {
                api_url: APP_METADATA_TELEMETRY_URL.to_string(),
                timeout_ms: 2000,
            })
        });

        let Some(config) = config else {
            msg_debug!(Message::TelemetryDisabled);
            return Self::disabled();
        };

        let client = match Client::builder().timeout(Duration::from_millis(config.timeout_ms)).build() {
            Ok(client) => client,
            Err(e) => {
                msg_debug!(Message::TelemetryEventFailed("init".to_string(), e.to_string()));
                return Self::disabled();
            }
        };

        let (sender, mut receiver) = mpsc::unbounded_channel::<TelemetryEvent>();
        let worker = tokio::spawn(async move {
            let ip = local_ip();
            while let Some(event) = receiver.recv().await {
                let payload = TelemetryPayload {
                    event,
                    ip,
                    app: APP_METADATA_NAME,
                    version: APP_METADATA_VERSION,
                    timestamp: Local::now().to_rfc3339(),
                };
                match client.post(&config.api_url).json(&payload).send().await {
                    Ok(res) if res.status().is_success() => msg_debug!(Message::TelemetryEventSent(event.to_string())),
                    Ok(res) => msg_debug!(Message::TelemetryEventFailed(event.to_string(), res.status().to_string())),
                    Err(e) => msg_debug!(Message::TelemetryEventFailed(event.to_string(), e.to_string())),
                }
            }
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    pub fn disabled() -> Self {
        Self { sender: None, worker: None }
    }

    pub fn record(&self, event: TelemetryEvent) {
        if let Some(sender) = &self.sender {
            // A closed channel only means the worker is gone
            let _ = sender.send(event);
        }
    }

    /// Closes the channel and gives queued events a bounded time to go out.
    pub async fn shutdown(mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if tokio::time::timeout(FLUSH_GRACE, worker).await.is_err() {
                msg_debug!(Message::TelemetryFlushTimedOut);
            }
        }
    }
}

/// Address of the interface used for outbound traffic.
///
/// Connecting a UDP socket only selects a route; nothing is sent.
fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_telemetry_swallows_events() {
        let telemetry = Telemetry::disabled();
        assert!(telemetry.sender.is_none());
        telemetry.record(TelemetryEvent::Visit);
        telemetry.shutdown().await;
    }

    #[tokio::test]
    async fn unreachable_endpoint_never_fails() {
        let telemetry = Telemetry::spawn(Some(TelemetryConfig {
            api_url: "http://127.0.0.1:9/collect".to_string(),
            timeout_ms: 200,
        }));
        assert!(telemetry.sender.is_some());
        telemetry.record(TelemetryEvent::Visit);
        telemetry.record(TelemetryEvent::Download);
        telemetry.shutdown().await;
    }

    #[test]
    fn build_metadata_is_embedded() {
        assert_eq!(APP_METADATA_NAME, env!("CARGO_PKG_NAME"));
        assert_eq!(APP_METADATA_VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(APP_METADATA_IMPORT_TARGET, "MoveInSync");
        assert_eq!(APP_METADATA_OWNER, "cabroster");
    }

    #[test]
    fn events_serialize_in_snake_case() {
        assert_eq!(serde_json::to_string(&TelemetryEvent::Download).unwrap(), "\"download\"");
    }
}
