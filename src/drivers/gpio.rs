//! Raw GPIO output exposed as an `embedded_hal` [`OutputPin`].
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the pin through `gpio_set_level` (the pin must
//! already be configured as an output by `hw_init`).
//! On host/test: records the level in memory only.

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{ESP_OK, gpio_set_level};

/// IDF return code from a rejected level write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioWriteError(pub i32);

impl embedded_hal::digital::Error for GpioWriteError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct GpioOutput {
    gpio: i32,
    level: PinState,
}

impl GpioOutput {
    /// Wrap an already-configured output.  Level is unknown until the
    /// first write; it reads as `Low` until then.
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            level: PinState::Low,
        }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Last level successfully written.
    pub fn level(&self) -> PinState {
        self.level
    }

    #[cfg(target_os = "espidf")]
    fn write(&mut self, level: PinState) -> Result<(), GpioWriteError> {
        let raw = u32::from(level == PinState::High);
        // SAFETY: register write on a pin configured as output in hw_init;
        // only the main loop owns this handle.
        let ret = unsafe { gpio_set_level(self.gpio, raw) };
        if ret != ESP_OK as i32 {
            return Err(GpioWriteError(ret));
        }
        self.level = level;
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    #[allow(clippy::unnecessary_wraps)]
    fn write(&mut self, level: PinState) -> Result<(), GpioWriteError> {
        log::trace!("gpio(sim): GPIO{} -> {:?}", self.gpio, level);
        self.level = level;
        Ok(())
    }
}

impl ErrorType for GpioOutput {
    type Error = GpioWriteError;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::High)
    }
}
