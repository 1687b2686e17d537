//! Relay state and the record of a single flip.

use core::fmt;

use serde::Serialize;

/// Logical relay state.  Resets to [`RelayState::Off`] on every boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RelayState {
    #[default]
    Off,
    On,
}

impl RelayState {
    /// The state a trigger byte moves to.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "OFF"),
            Self::On => write!(f, "ON"),
        }
    }
}

/// One applied flip, stamped with uptime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: RelayState,
    pub to: RelayState,
    pub at_ms: u64,
}
