//! 74HC595 serial-in / parallel-out shift register, bit-banged.
//!
//! ```text
//!  latch  ‾‾\______________________________________/‾‾‾‾
//!  clock  ____/‾\___/‾\___/‾\ ... ___/‾\___/‾\__________
//!  data   ==b7===b6===b5==== ... ===b1===b0=============
//! ```
//!
//! Bits go out MSB first.  Each rising clock edge moves DS into the first
//! stage; the rising latch edge copies all eight stages to Q0..Q7 at once,
//! so the outputs never show a partially shifted value.  Nothing
//! acknowledges the transfer; the clock high-time is the only guarantee.
//!
//! A transfer cannot be interrupted: [`write`](ShiftRegister::write) takes
//! `&mut self` and runs the whole frame before returning.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use log::trace;

use super::line_set::write;

pub struct ShiftRegister<L, D> {
    latch: L,
    clock: L,
    data: L,
    delay: D,
    pulse_ns: u32,
}

impl<L, D> ShiftRegister<L, D>
where
    L: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// `pulse_ns` is clamped to at least 1 ns.
    pub fn new(latch: L, clock: L, data: L, delay: D, pulse_ns: u32) -> Self {
        Self {
            latch,
            clock,
            data,
            delay,
            pulse_ns: pulse_ns.max(1),
        }
    }

    /// Shift `value` in MSB first and latch it onto the outputs.
    pub fn write(&mut self, value: u8) {
        trace!("595: shifting 0x{:02X}", value);
        write(&mut self.latch, PinState::Low);

        let mut bits = value;
        for _ in 0..8 {
            let target = bits & 0x80;
            bits <<= 1;

            write(&mut self.data, PinState::from(target == 0x80));

            write(&mut self.clock, PinState::High);
            self.delay.delay_ns(self.pulse_ns);
            write(&mut self.clock, PinState::Low);
        }

        write(&mut self.latch, PinState::High);
    }

    /// Give the bus lines and delay back: `(latch, clock, data, delay)`.
    pub fn into_parts(self) -> (L, L, L, D) {
        (self.latch, self.clock, self.data, self.delay)
    }
}
