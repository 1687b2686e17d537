//! Controller configuration.
//!
//! The reference device has no configuration surface: every value here is
//! compiled in, and [`ControllerConfig::default`] holds the fixed values.
//! The struct exists so drivers and tests share one definition.

use serde::Serialize;

use crate::error::{Error, Result};

/// ASCII `'0'`, the only byte that flips the relay.
pub const TRIGGER_BYTE: u8 = b'0';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerConfig {
    // --- Serial ---
    /// Command UART baud rate.
    pub baud_rate: u32,
    /// Byte value that toggles the relay.
    pub trigger_byte: u8,

    // --- Relay ---
    /// `true` if ON drives the line high.
    pub relay_active_high: bool,

    // --- Timing ---
    /// Pause after every poll iteration (milliseconds).
    pub poll_interval_ms: u32,
    /// Telemetry report interval (seconds).
    pub telemetry_interval_secs: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            trigger_byte: TRIGGER_BYTE,
            relay_active_high: true,
            poll_interval_ms: 100,
            telemetry_interval_secs: 60,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(Error::Config("baud_rate must be non-zero"));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }
        if self.telemetry_interval_secs == 0 {
            return Err(Error::Config("telemetry_interval_secs must be non-zero"));
        }
        Ok(())
    }

    /// Number of poll iterations between telemetry reports.
    pub fn telemetry_every_polls(&self) -> u32 {
        let per_sec = 1000 / self.poll_interval_ms.max(1);
        (self.telemetry_interval_secs * per_sec.max(1)).max(1)
    }
}
