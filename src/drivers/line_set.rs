//! The shield's eight output lines.
//!
//! Opened once, in a fixed order, and driven LOW immediately after each
//! open so the shield can never power up in an undefined state.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use log::{debug, error, info};

use crate::app::ports::GpioPort;
use crate::config::PinAssignment;
use crate::error::Result;
use crate::pins::LineId;

/// Drive a line to `level`.  Lines are infallible by type.
pub(crate) fn write<L: OutputPin<Error = Infallible>>(line: &mut L, level: PinState) {
    let Ok(()) = line.set_state(level);
}

/// Exclusively owned handles for every line the shield uses.
pub struct LineSet<L> {
    pub latch: L,
    pub clock: L,
    pub data: L,
    /// Active low.
    pub register_enable: L,
    /// Ordered M1..M4.
    pub motor_enable: [L; 4],
}

impl<L: OutputPin<Error = Infallible>> LineSet<L> {
    /// Open every line in `pins` on `gpio` and drive it LOW.
    ///
    /// The first line that cannot be opened aborts acquisition; lines
    /// already opened are dropped.
    pub fn acquire<G>(gpio: &mut G, pins: &PinAssignment) -> Result<Self>
    where
        G: GpioPort<Line = L>,
    {
        let mut open = |id: LineId| -> Result<L> {
            let mut line = gpio.open_output(id).inspect_err(|e| {
                error!("gpio: cannot open line {}: {}", id, e);
            })?;
            write(&mut line, PinState::Low);
            debug!("gpio: line {} open, driven low", id);
            Ok(line)
        };

        let latch = open(pins.latch)?;
        let clock = open(pins.clock)?;
        let data = open(pins.data)?;
        let register_enable = open(pins.register_enable)?;
        let [m1, m2, m3, m4] = pins.motor_enable;
        let motor_enable = [open(m1)?, open(m2)?, open(m3)?, open(m4)?];

        info!("gpio: acquired lines {:?}", pins.all());
        Ok(Self {
            latch,
            clock,
            data,
            register_enable,
            motor_enable,
        })
    }

    /// Drive all eight lines LOW.
    pub fn all_low(&mut self) {
        write(&mut self.latch, PinState::Low);
        write(&mut self.clock, PinState::Low);
        write(&mut self.data, PinState::Low);
        write(&mut self.register_enable, PinState::Low);
        for line in &mut self.motor_enable {
            write(line, PinState::Low);
        }
    }
}
