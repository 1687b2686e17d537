//! GPIO / peripheral pin assignments for the relay controller board.
//!
//! Single source of truth — drivers reference this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Relay output
// ---------------------------------------------------------------------------

/// Digital output driving the solenoid relay coil transistor.
pub const RELAY_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// UART command channel
// ---------------------------------------------------------------------------

/// IDF UART port carrying trigger bytes from the host.
pub const COMMAND_UART_PORT: i32 = 0;
pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;

/// Driver-side RX ring size in bytes.  Must exceed the hardware FIFO (128).
pub const UART_RX_BUFFER_BYTES: i32 = 256;
