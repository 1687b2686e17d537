//! Pin controller — the whole of the device's behaviour.
//!
//! [`PinController`] owns the logical [`RelayState`] and turns trigger
//! bytes into pin writes.  All I/O flows through port traits passed in at
//! call sites, so the controller is testable with mock adapters.
//!
//! ```text
//!  ByteSource ──▶ ┌────────────────────┐ ──▶ EventSink
//!                 │   PinController    │
//!   RelayPort ◀── │  Off ⇄ On (trigger)│
//!                 └────────────────────┘
//! ```

use heapless::HistoryBuffer;
use log::{debug, info, warn};

use crate::config::ControllerConfig;

use super::commands::Command;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ByteSource, EventSink, RelayPort};
use super::state::{RelayState, Transition};

/// Number of recent transitions kept in memory.
pub const HISTORY_LEN: usize = 16;

pub struct PinController {
    state: RelayState,
    trigger: u8,
    toggles: u32,
    ignored: u32,
    drive_failures: u32,
    history: HistoryBuffer<Transition, HISTORY_LEN>,
}

impl PinController {
    /// Does **not** touch the pin — call [`start`](Self::start) next.
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            state: RelayState::Off,
            trigger: config.trigger_byte,
            toggles: 0,
            ignored: 0,
            drive_failures: 0,
            history: HistoryBuffer::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the pin to the initial (Off) level and announce the start.
    pub fn start(&mut self, relay: &mut impl RelayPort, sink: &mut impl EventSink) {
        self.apply(relay, sink);
        sink.emit(&AppEvent::Started(self.state));
        info!("PinController started in {}", self.state);
    }

    // ── Per-iteration work ────────────────────────────────────

    /// One poll iteration: if a byte is waiting, consume exactly one and
    /// act on it.  Returns the decoded command, or `None` if the channel
    /// was empty.  The caller owns the inter-poll delay.
    pub fn poll(
        &mut self,
        hw: &mut (impl ByteSource + RelayPort),
        sink: &mut impl EventSink,
        now_ms: u64,
    ) -> Option<Command> {
        if hw.bytes_available() == 0 {
            return None;
        }
        let byte = hw.read_byte()?;
        Some(self.handle_byte(byte, hw, sink, now_ms))
    }

    /// Act on a byte that has already been read from the channel.
    pub fn handle_byte(
        &mut self,
        byte: u8,
        relay: &mut impl RelayPort,
        sink: &mut impl EventSink,
        now_ms: u64,
    ) -> Command {
        let cmd = Command::decode(byte, self.trigger);
        match cmd {
            Command::Toggle => {
                let from = self.state;
                let to = from.toggled();
                self.state = to;
                self.toggles = self.toggles.wrapping_add(1);
                self.history.write(Transition { from, to, at_ms: now_ms });
                self.apply(relay, sink);
                sink.emit(&AppEvent::StateChanged { from, to, at_ms: now_ms });
            }
            Command::Ignore(b) => {
                self.ignored = self.ignored.wrapping_add(1);
                debug!("ignored byte 0x{:02x}", b);
            }
        }
        cmd
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Trigger bytes applied since boot.
    pub fn toggle_count(&self) -> u32 {
        self.toggles
    }

    /// Non-trigger bytes discarded since boot.
    pub fn ignored_count(&self) -> u32 {
        self.ignored
    }

    pub fn drive_failures(&self) -> u32 {
        self.drive_failures
    }

    /// Recent transitions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Transition> {
        self.history.oldest_ordered()
    }

    pub fn build_telemetry(&self, uptime_ms: u64) -> TelemetryData {
        TelemetryData {
            state: self.state,
            uptime_ms,
            toggles: self.toggles,
            ignored_bytes: self.ignored,
            drive_failures: self.drive_failures,
            last_transition: self.history.recent().copied(),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Push the logical state to the pin.  A failed write leaves the
    /// logical state as is; the next flip drives the line again.
    fn apply(&mut self, relay: &mut impl RelayPort, sink: &mut impl EventSink) {
        if let Err(e) = relay.drive(self.state) {
            self.drive_failures = self.drive_failures.wrapping_add(1);
            warn!("relay drive to {} failed: {}", self.state, e);
            sink.emit(&AppEvent::DriveFailed { state: self.state });
        }
    }
}
