//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC console on the board, stderr in simulation).
//! Telemetry goes out as a single JSON line for machine parsing.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | relay={}", state);
            }
            AppEvent::StateChanged { from, to, at_ms } => {
                info!(
                    "STATE | {} -> {} | t={}ms | relay {}",
                    from,
                    to,
                    at_ms,
                    if to.is_on() { "activated" } else { "deactivated" }
                );
            }
            AppEvent::DriveFailed { state } => {
                warn!("FAULT | relay pin not driven to {}", state);
            }
            AppEvent::Telemetry(t) => match serde_json::to_string(t) {
                Ok(json) => info!("TELEM | {}", json),
                Err(e) => warn!("TELEM | encode failed: {}", e),
            },
        }
    }
}
