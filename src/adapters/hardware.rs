//! Hardware adapter — bridges the board peripherals to the port traits.
//!
//! Owns the relay driver and the command UART, exposing them through
//! [`ByteSource`] and [`RelayPort`].  Generic over the relay's output pin
//! so the same adapter runs on the board ([`GpioOutput`]) and against
//! test doubles.
//!
//! [`GpioOutput`]: crate::drivers::gpio::GpioOutput

use embedded_hal::digital::OutputPin;

use crate::app::ports::{ByteSource, RelayPort};
use crate::app::state::RelayState;
use crate::drivers::relay::RelayDriver;
use crate::drivers::uart::UartRx;
use crate::error::{ActuatorError, Error, Result};

pub struct HardwareAdapter<P> {
    relay: RelayDriver<P>,
    uart: UartRx,
}

impl<P: OutputPin> HardwareAdapter<P> {
    pub fn new(relay: RelayDriver<P>, uart: UartRx) -> Self {
        Self { relay, uart }
    }

    /// Claim `pin` as the relay output (driven inactive) and pair it with
    /// the command UART.
    pub fn open(pin: P, active_high: bool, uart: UartRx) -> Result<Self> {
        let relay = RelayDriver::new(pin, active_high).map_err(|e| {
            log::debug!("relay pin error: {:?}", e);
            Error::from(ActuatorError::GpioWriteFailed)
        })?;
        Ok(Self::new(relay, uart))
    }

    pub fn relay(&self) -> &RelayDriver<P> {
        &self.relay
    }
}

// ── ByteSource implementation ─────────────────────────────────

impl<P> ByteSource for HardwareAdapter<P> {
    fn bytes_available(&mut self) -> usize {
        self.uart.available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.uart.read()
    }
}

// ── RelayPort implementation ──────────────────────────────────

impl<P: OutputPin> RelayPort for HardwareAdapter<P> {
    fn drive(&mut self, state: RelayState) -> core::result::Result<(), ActuatorError> {
        self.relay.set(state).map_err(|e| {
            log::debug!("relay pin error: {:?}", e);
            ActuatorError::GpioWriteFailed
        })
    }
}
