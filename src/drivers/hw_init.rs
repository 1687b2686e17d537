//! One-shot hardware peripheral initialization.
//!
//! Configures the relay GPIO as an output and installs the command UART
//! driver using raw ESP-IDF sys calls.  Called once from `main()` before
//! the polling loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::config::ControllerConfig;
use crate::error::{InitError, Result};

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
const UART_PIN_NO_CHANGE: i32 = -1;

/// `ESP_OK` as returned by every IDF driver call.
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
const IDF_OK: i32 = 0;

/// Map an IDF return code to `Ok` or the given init failure.
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
fn check(ret: i32, fail: fn(i32) -> InitError) -> core::result::Result<(), InitError> {
    if ret == IDF_OK { Ok(()) } else { Err(fail(ret)) }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals(config: &ControllerConfig) -> Result<()> {
    // SAFETY: Called once from main() before the loop; single-threaded.
    unsafe {
        init_relay_output(config.relay_active_high)?;
        init_command_uart(config.baud_rate)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(config: &ControllerConfig) -> Result<()> {
    log::info!(
        "hw_init(sim): peripheral init skipped (relay=GPIO{}, uart {} baud)",
        crate::pins::RELAY_GPIO,
        config.baud_rate
    );
    Ok(())
}

// ── Relay output ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_relay_output(active_high: bool) -> core::result::Result<(), InitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::RELAY_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        ..Default::default()
    };
    check(unsafe { gpio_config(&cfg) }, InitError::GpioConfigFailed)?;

    // Inactive level before anything else can observe the pin.
    let inactive = u32::from(!active_high);
    check(
        unsafe { gpio_set_level(pins::RELAY_GPIO, inactive) },
        InitError::GpioConfigFailed,
    )?;

    info!("hw_init: relay output on GPIO{}", pins::RELAY_GPIO);
    Ok(())
}

// ── Command UART ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_command_uart(baud_rate: u32) -> core::result::Result<(), InitError> {
    let cfg = uart_config_t {
        baud_rate: baud_rate as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };
    check(
        unsafe { uart_param_config(pins::COMMAND_UART_PORT, &cfg) },
        InitError::UartConfigFailed,
    )?;

    let ret = unsafe {
        uart_set_pin(
            pins::COMMAND_UART_PORT,
            pins::UART_TX_GPIO,
            pins::UART_RX_GPIO,
            UART_PIN_NO_CHANGE,
            UART_PIN_NO_CHANGE,
        )
    };
    check(ret, InitError::UartConfigFailed)?;

    // RX ring only; nothing is ever transmitted on this port by the driver.
    let ret = unsafe {
        uart_driver_install(
            pins::COMMAND_UART_PORT,
            pins::UART_RX_BUFFER_BYTES,
            0,
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    check(ret, InitError::UartInstallFailed)?;

    info!("hw_init: UART{} at {} baud (8N1)", pins::COMMAND_UART_PORT, baud_rate);
    Ok(())
}
