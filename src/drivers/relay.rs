//! Solenoid relay driver.
//!
//! A relay is one digital output.  The driver owns the pin and the
//! board polarity so callers only ever speak in [`RelayState`].
//! Generic over any `embedded_hal` [`OutputPin`]; on the board that is
//! [`GpioOutput`](super::gpio::GpioOutput).

use embedded_hal::digital::{OutputPin, PinState};

use crate::app::state::RelayState;

pub struct RelayDriver<P> {
    pin: P,
    active_high: bool,
    state: RelayState,
}

impl<P: OutputPin> RelayDriver<P> {
    /// Take ownership of `pin` and drive it to the inactive level before
    /// returning, so the line is defined from first use.
    pub fn new(pin: P, active_high: bool) -> Result<Self, P::Error> {
        let mut driver = Self {
            pin,
            active_high,
            state: RelayState::Off,
        };
        driver.set(RelayState::Off)?;
        Ok(driver)
    }

    pub fn set(&mut self, state: RelayState) -> Result<(), P::Error> {
        self.pin.set_state(self.level_for(state))?;
        self.state = state;
        Ok(())
    }

    /// Electrical level that represents `state` on this board.
    pub fn level_for(&self, state: RelayState) -> PinState {
        PinState::from(state.is_on() == self.active_high)
    }

    /// Last state successfully written to the pin.
    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn is_energised(&self) -> bool {
        self.state.is_on()
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
