//! Relay driver, command UART, and peripheral helpers.

pub mod delay;
pub mod gpio;
pub mod hw_init;
pub mod relay;
pub mod uart;
