//! Application core — pure domain logic, zero I/O.
//!
//! The relay state machine and its byte decoding live here.  All
//! interaction with hardware happens through the port traits in
//! [`ports`], keeping this layer testable without real peripherals.

pub mod commands;
pub mod controller;
pub mod events;
pub mod ports;
pub mod state;
