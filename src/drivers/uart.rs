//! Non-blocking receive side of the command UART.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the IDF UART driver's RX ring (installed by
//! `hw_init`) with a zero tick timeout, so a poll never blocks.
//! On host: a reader thread forwards stdin bytes over a channel; the
//! driver drains it into a bounded FIFO standing in for the RX ring.
//! Bytes that do not fit stay queued in the channel.

#[cfg(not(target_os = "espidf"))]
use std::sync::mpsc::{self, Receiver, TryRecvError};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{ESP_OK, uart_get_buffered_data_len, uart_port_t, uart_read_bytes};

/// Capacity of the host-side RX FIFO, matching the ESP32-S3 hardware FIFO.
pub const RX_FIFO_BYTES: usize = 128;

#[cfg(target_os = "espidf")]
pub struct UartRx {
    port: uart_port_t,
}

#[cfg(target_os = "espidf")]
impl UartRx {
    /// Attach to a port whose driver was installed by `hw_init`.
    pub fn new(port: i32) -> Self {
        Self { port }
    }

    pub fn available(&mut self) -> usize {
        let mut len: usize = 0;
        // SAFETY: driver installed during init; out-pointer is a live local.
        let ret = unsafe { uart_get_buffered_data_len(self.port, &mut len) };
        if ret != ESP_OK as i32 {
            return 0;
        }
        len
    }

    pub fn read(&mut self) -> Option<u8> {
        let mut byte = 0u8;
        // SAFETY: one-byte buffer on the stack; zero ticks means no blocking.
        let n = unsafe {
            uart_read_bytes(self.port, (&raw mut byte).cast::<core::ffi::c_void>(), 1, 0)
        };
        (n == 1).then_some(byte)
    }
}

#[cfg(not(target_os = "espidf"))]
pub struct UartRx {
    rx: Option<Receiver<u8>>,
    fifo: heapless::Deque<u8, RX_FIFO_BYTES>,
}

#[cfg(not(target_os = "espidf"))]
impl UartRx {
    /// Feed from an arbitrary byte channel (tests, simulations).
    pub fn from_receiver(rx: Receiver<u8>) -> Self {
        Self {
            rx: Some(rx),
            fifo: heapless::Deque::new(),
        }
    }

    /// Feed from the process's stdin.  Each byte typed is one UART byte.
    pub fn from_stdin() -> std::io::Result<Self> {
        use std::io::Read;

        let (tx, rx) = mpsc::channel();
        std::thread::Builder::new()
            .name("uart-sim".into())
            .spawn(move || {
                for byte in std::io::stdin().lock().bytes() {
                    let Ok(byte) = byte else { break };
                    if tx.send(byte).is_err() {
                        break;
                    }
                }
                log::info!("uart(sim): stdin closed");
            })?;
        log::info!("uart(sim): reading command bytes from stdin");
        Ok(Self::from_receiver(rx))
    }

    pub fn available(&mut self) -> usize {
        self.refill();
        self.fifo.len()
    }

    pub fn read(&mut self) -> Option<u8> {
        self.refill();
        self.fifo.pop_front()
    }

    fn refill(&mut self) {
        let Some(rx) = &self.rx else { return };
        let mut disconnected = false;
        while !self.fifo.is_full() {
            match rx.try_recv() {
                Ok(byte) => {
                    // Cannot fail: checked is_full above.
                    let _ = self.fifo.push_back(byte);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        if disconnected {
            self.rx = None;
        }
    }
}
