//! Inbound commands decoded from the serial line.
//!
//! The wire protocol is a single byte with no framing: the trigger value
//! toggles the relay, every other value is a no-op.

/// What the controller does with one received byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip the relay.
    Toggle,
    /// Byte was not the trigger; discarded silently.
    Ignore(u8),
}

impl Command {
    pub fn decode(byte: u8, trigger: u8) -> Self {
        if byte == trigger {
            Self::Toggle
        } else {
            Self::Ignore(byte)
        }
    }
}
