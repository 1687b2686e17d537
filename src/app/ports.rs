//! Port traits — the boundary between the controller and the board.
//!
//! ```text
//!   UART ──▶ ByteSource ──▶ PinController ──▶ RelayPort ──▶ GPIO
//!                                  │
//!                                  └────────▶ EventSink ──▶ log
//! ```
//!
//! The [`PinController`](super::controller::PinController) takes these as
//! generics, so it runs unchanged against mock adapters on the host.

use crate::error::ActuatorError;

use super::state::RelayState;

// ───────────────────────────────────────────────────────────────
// Byte source (driven adapter: serial → domain)
// ───────────────────────────────────────────────────────────────

/// Non-blocking access to the command channel.
pub trait ByteSource {
    /// Number of received bytes waiting to be read.  Never blocks.
    fn bytes_available(&mut self) -> usize;

    /// Consume one byte, or `None` if the buffer is empty.
    fn read_byte(&mut self) -> Option<u8>;
}

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → GPIO)
// ───────────────────────────────────────────────────────────────

pub trait RelayPort {
    /// Drive the output line to the level representing `state`.
    fn drive(&mut self, state: RelayState) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
