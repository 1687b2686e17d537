//! Mock hardware adapter for integration tests.
//!
//! Scripted RX bytes in, every relay write recorded out, so tests can
//! assert on the full pin history without touching real GPIO.

use relay_toggle::app::events::AppEvent;
use relay_toggle::app::ports::{ByteSource, EventSink, RelayPort};
use relay_toggle::app::state::RelayState;
use relay_toggle::error::ActuatorError;
use std::collections::VecDeque;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub rx: VecDeque<u8>,
    pub writes: Vec<RelayState>,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            writes: Vec::new(),
            fail_writes: false,
        }
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        let mut hw = Self::new();
        hw.rx.extend(bytes.iter().copied());
        hw
    }

    /// Level the pin was last driven to, `None` if never written.
    pub fn pin(&self) -> Option<RelayState> {
        self.writes.last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for MockHardware {
    fn bytes_available(&mut self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}

impl RelayPort for MockHardware {
    fn drive(&mut self, state: RelayState) -> Result<(), ActuatorError> {
        if self.fail_writes {
            return Err(ActuatorError::GpioWriteFailed);
        }
        self.writes.push(state);
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn state_changes(&self) -> Vec<(RelayState, RelayState)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::StateChanged { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
