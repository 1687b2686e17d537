//! Relay toggle firmware — main entry point.
//!
//! ```text
//!  UART RX ─▶ HardwareAdapter ─▶ PinController ─▶ HardwareAdapter ─▶ GPIO 8
//!                                     │
//!                                     └─▶ LogEventSink ─▶ console
//! ```
//!
//! Every iteration: poll one byte, act on it, sleep `poll_interval_ms`.
//! On a host build the UART is simulated from stdin, so
//! `printf 00A0 | cargo run` exercises the full loop.
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use embedded_hal::delay::DelayNs;
use log::info;

use relay_toggle::adapters::hardware::HardwareAdapter;
use relay_toggle::adapters::log_sink::LogEventSink;
use relay_toggle::adapters::time::UptimeClock;
use relay_toggle::app::controller::PinController;
use relay_toggle::app::events::AppEvent;
use relay_toggle::app::ports::EventSink;
use relay_toggle::config::ControllerConfig;
use relay_toggle::drivers::delay::PollDelay;
use relay_toggle::drivers::gpio::GpioOutput;
use relay_toggle::drivers::{hw_init, uart::UartRx};
use relay_toggle::pins;

#[cfg(target_os = "espidf")]
fn init_platform() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn init_platform() -> Result<()> {
    stderrlog::new()
        .module("relay_toggle")
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()
        .context("logger init")?;
    Ok(())
}

#[cfg(target_os = "espidf")]
fn open_uart() -> Result<UartRx> {
    Ok(UartRx::new(pins::COMMAND_UART_PORT))
}

#[cfg(not(target_os = "espidf"))]
fn open_uart() -> Result<UartRx> {
    UartRx::from_stdin().context("spawning stdin reader")
}

fn main() -> Result<()> {
    // ── 1. Platform bootstrap ─────────────────────────────────
    init_platform()?;
    info!("relay-toggle v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compiled in) ────────────────────────
    let config = ControllerConfig::default();
    config.validate()?;
    let json = serde_json::to_string(&config)
        .map_err(|e| anyhow::anyhow!("config encode: {}", e))?;
    info!("Config: {}", json);

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals(&config) {
        // Nothing useful can run without the relay pin or the UART.
        log::error!("{}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let mut hw = HardwareAdapter::open(
        GpioOutput::new(pins::RELAY_GPIO),
        config.relay_active_high,
        open_uart()?,
    )
    .context("relay pin")?;

    // ── 4. Controller ─────────────────────────────────────────
    let clock = UptimeClock::new();
    let mut sink = LogEventSink::new();
    let mut delay = PollDelay::new();
    let mut controller = PinController::new(&config);
    controller.start(&mut hw, &mut sink);

    info!("System ready. Entering poll loop.");

    // ── 5. Poll loop (runs until power-off) ───────────────────
    let telemetry_every = config.telemetry_every_polls();
    let mut polls: u32 = 0;

    loop {
        controller.poll(&mut hw, &mut sink, clock.uptime_ms());

        polls += 1;
        if polls >= telemetry_every {
            polls = 0;
            sink.emit(&AppEvent::Telemetry(
                controller.build_telemetry(clock.uptime_ms()),
            ));
        }

        delay.delay_ms(config.poll_interval_ms);
    }
}
