//! ESP-IDF GPIO controller adapter.
//!
//! Configures lines through the raw `gpio_config` / `gpio_set_level` calls,
//! the same path the one-shot peripheral init uses.  The controller can be
//! taken once per boot; a second `take()` reports it as unavailable.

use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::{ErrorType, OutputPin};
use esp_idf_svc::sys::*;
use log::{error, info};

use crate::app::ports::GpioPort;
use crate::error::{Result, ShieldError};
use crate::pins::LineId;

/// ESP32 pin numbers are below 64 (`pin_bit_mask` is a `u64`).
const MAX_GPIO: LineId = 64;

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Exclusive handle to the chip's GPIO matrix.
pub struct EspGpio {
    _private: (),
}

impl EspGpio {
    pub fn take() -> Result<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            error!("esp-gpio: controller already taken");
            return Err(ShieldError::HardwareUnavailable);
        }
        info!("esp-gpio: controller acquired");
        Ok(Self { _private: () })
    }
}

impl GpioPort for EspGpio {
    type Line = EspLine;

    fn open_output(&mut self, id: LineId) -> Result<EspLine> {
        if !(0..MAX_GPIO).contains(&id) {
            error!("esp-gpio: GPIO {} does not exist", id);
            return Err(ShieldError::HardwareUnavailable);
        }

        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << id,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: main-task only; `cfg` outlives the call.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            error!("esp-gpio: gpio_config({}) failed (rc={})", id, ret);
            return Err(ShieldError::HardwareUnavailable);
        }
        Ok(EspLine { pin: id })
    }
}

/// A configured push-pull output.
pub struct EspLine {
    pin: LineId,
}

impl ErrorType for EspLine {
    type Error = Infallible;
}

impl OutputPin for EspLine {
    fn set_low(&mut self) -> core::result::Result<(), Infallible> {
        // SAFETY: pin was configured as an output in `open_output`.
        unsafe { gpio_set_level(self.pin, 0) };
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Infallible> {
        // SAFETY: pin was configured as an output in `open_output`.
        unsafe { gpio_set_level(self.pin, 1) };
        Ok(())
    }
}
