//! In-memory GPIO controller.
//!
//! Implements [`GpioPort`] without hardware.  Every write lands in a shared
//! ordered trace so tests (and host-side tooling) can replay exactly what
//! the shield would have seen on its header.  Lines hold a handle to the
//! same bus as the controller, so the controller can still be inspected
//! after the lines have been handed to a driver.
//!
//! The replay helpers model a 74HC595: a rising clock edge shifts DS in, a
//! rising latch edge copies the shift stage to the outputs.

use core::convert::Infallible;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use log::warn;

use crate::app::ports::GpioPort;
use crate::error::{Result, ShieldError};
use crate::pins::LineId;

/// A single recorded line write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWrite {
    pub line: LineId,
    pub level: PinState,
}

#[derive(Default)]
struct Bus {
    levels: HashMap<LineId, PinState>,
    trace: Vec<LineWrite>,
    opens: HashMap<LineId, usize>,
}

/// Simulated controller.  Clones share the same bus.
#[derive(Clone)]
pub struct SimGpio {
    bus: Rc<RefCell<Bus>>,
    available: bool,
}

impl SimGpio {
    pub fn new() -> Self {
        Self {
            bus: Rc::default(),
            available: true,
        }
    }

    /// A host with no GPIO controller: every open fails.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Last level written to `id`, or `None` if it was never written.
    pub fn level(&self, id: LineId) -> Option<PinState> {
        self.bus.borrow().levels.get(&id).copied()
    }

    pub fn is_high(&self, id: LineId) -> bool {
        self.level(id) == Some(PinState::High)
    }

    /// How many times `id` has been opened.
    pub fn open_count(&self, id: LineId) -> usize {
        self.bus.borrow().opens.get(&id).copied().unwrap_or(0)
    }

    /// Every write so far, in order.
    pub fn trace(&self) -> Vec<LineWrite> {
        self.bus.borrow().trace.clone()
    }

    /// Forget the recorded writes; current levels are kept.
    pub fn clear_trace(&self) {
        self.bus.borrow_mut().trace.clear();
    }

    /// Data level sampled at every rising edge of `clock`.
    pub fn bits_clocked(&self, clock: LineId, data: LineId) -> Vec<bool> {
        let mut bits = Vec::new();
        self.replay(clock, data, None, |w, levels| {
            if w.line == clock && w.level == PinState::High && levels.clock == PinState::Low {
                bits.push(levels.data == PinState::High);
            }
        });
        bits
    }

    /// Output value presented at every rising edge of `latch`.
    pub fn latched_outputs(&self, latch: LineId, clock: LineId, data: LineId) -> Vec<u8> {
        let mut stage = 0u8;
        let mut outputs = Vec::new();
        self.replay(clock, data, Some(latch), |w, levels| {
            if w.level != PinState::High {
                return;
            }
            if w.line == clock && levels.clock == PinState::Low {
                stage = (stage << 1) | u8::from(levels.data == PinState::High);
            } else if w.line == latch && levels.latch == PinState::Low {
                outputs.push(stage);
            }
        });
        outputs
    }

    /// Walk the trace, calling `f` with each write and the bus levels as they
    /// were *before* that write.
    fn replay(
        &self,
        clock: LineId,
        data: LineId,
        latch: Option<LineId>,
        mut f: impl FnMut(&LineWrite, &BusLevels),
    ) {
        let mut levels = BusLevels::default();
        for w in &self.bus.borrow().trace {
            f(w, &levels);
            if w.line == clock {
                levels.clock = w.level;
            } else if w.line == data {
                levels.data = w.level;
            } else if Some(w.line) == latch {
                levels.latch = w.level;
            }
        }
    }
}

impl Default for SimGpio {
    fn default() -> Self {
        Self::new()
    }
}

struct BusLevels {
    latch: PinState,
    clock: PinState,
    data: PinState,
}

impl Default for BusLevels {
    fn default() -> Self {
        Self {
            latch: PinState::Low,
            clock: PinState::Low,
            data: PinState::Low,
        }
    }
}

impl GpioPort for SimGpio {
    type Line = SimLine;

    fn open_output(&mut self, id: LineId) -> Result<SimLine> {
        if !self.available {
            warn!("sim-gpio: no controller, cannot open line {}", id);
            return Err(ShieldError::HardwareUnavailable);
        }
        *self.bus.borrow_mut().opens.entry(id).or_default() += 1;
        Ok(SimLine {
            id,
            bus: Rc::clone(&self.bus),
        })
    }
}

/// Output line handed out by [`SimGpio`].
pub struct SimLine {
    id: LineId,
    bus: Rc<RefCell<Bus>>,
}

impl SimLine {
    pub fn id(&self) -> LineId {
        self.id
    }

    fn record(&mut self, level: PinState) {
        let mut bus = self.bus.borrow_mut();
        bus.levels.insert(self.id, level);
        bus.trace.push(LineWrite {
            line: self.id,
            level,
        });
    }
}

impl ErrorType for SimLine {
    type Error = Infallible;
}

impl OutputPin for SimLine {
    fn set_low(&mut self) -> core::result::Result<(), Infallible> {
        self.record(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Infallible> {
        self.record(PinState::High);
        Ok(())
    }
}
