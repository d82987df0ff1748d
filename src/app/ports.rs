//! Port traits: the boundary between shield logic and the outside world.
//!
//! ```text
//!   GpioPort ──▶ MotorShield ──▶ MotionPort ──▶ DemoSequencer ──▶ EventSink
//! ```
//!
//! The driver only needs a controller that can open output lines; the
//! sequencer (and any UI) only needs the command surface.  Neither side
//! touches hardware directly, so everything runs on the host against
//! [`SimGpio`](crate::adapters::sim_gpio::SimGpio).

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::drivers::motor_shield::ShieldStatus;
use crate::error::Result;
use crate::motion::DirectionCommand;
use crate::pins::LineId;

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: domain → pin driver)
// ───────────────────────────────────────────────────────────────

/// A platform GPIO controller able to hand out push-pull output lines.
///
/// Writes on a returned line cannot fail: a stuck or disconnected pin is
/// not observable without a read-back path, which the shield does not have.
pub trait GpioPort {
    type Line: OutputPin<Error = Infallible>;

    /// Open `id` and configure it as an output.
    ///
    /// Fails with [`ShieldError::HardwareUnavailable`](crate::error::ShieldError)
    /// when there is no controller behind this port.
    fn open_output(&mut self, id: LineId) -> Result<Self::Line>;
}

// ───────────────────────────────────────────────────────────────
// Motion port (driving side: sequencer / UI → shield)
// ───────────────────────────────────────────────────────────────

/// Command surface consumed by the demo sequencer and status observers.
pub trait MotionPort {
    /// Execute a direction command.  `Stop` is equivalent to [`stop`](Self::stop).
    fn apply(&mut self, command: DirectionCommand);

    /// Drop every motor enable and disable the shield.
    fn stop(&mut self);

    /// Snapshot for status reporting.
    fn status(&self) -> ShieldStatus;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / UI)
// ───────────────────────────────────────────────────────────────

/// Receives structured [`AppEvent`](super::events::AppEvent)s.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
