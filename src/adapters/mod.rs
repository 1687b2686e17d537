//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements           | Connects to              |
//! |------------|----------------------|--------------------------|
//! | `hardware` | ByteSource           | Command UART RX          |
//! |            | RelayPort            | Relay GPIO               |
//! | `log_sink` | EventSink            | Serial log output        |
//! | `time`     | —                    | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod time;
