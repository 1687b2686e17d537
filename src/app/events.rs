//! Outbound application events.
//!
//! The [`PinController`](super::controller::PinController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Nothing is
//! ever written back over the command UART; sinks go to the log console.

use serde::Serialize;

use super::state::{RelayState, Transition};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Controller started; pin driven to the initial state.
    Started(RelayState),

    /// A trigger byte flipped the relay.
    StateChanged {
        from: RelayState,
        to: RelayState,
        at_ms: u64,
    },

    /// The pin could not be driven to match `state`.
    DriveFailed { state: RelayState },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// Point-in-time controller counters.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryData {
    pub state: RelayState,
    pub uptime_ms: u64,
    pub toggles: u32,
    pub ignored_bytes: u32,
    pub drive_failures: u32,
    pub last_transition: Option<Transition>,
}
