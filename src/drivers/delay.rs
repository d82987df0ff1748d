//! Monotonic-clock busy wait.
//!
//! The clock pulse on the shift-register bus is far shorter than a
//! scheduler tick, so sleeping is not an option.  `SpinDelay` polls
//! [`Instant`] until the requested time has passed.

use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpinDelay;

impl DelayNs for SpinDelay {
    fn delay_ns(&mut self, ns: u32) {
        let start = Instant::now();
        let wait = Duration::from_nanos(u64::from(ns));
        while start.elapsed() < wait {
            core::hint::spin_loop();
        }
    }
}
