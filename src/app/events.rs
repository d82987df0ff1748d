//! Outbound application events.
//!
//! The [`DemoSequencer`](super::sequencer::DemoSequencer) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them: log to serial, update a status
//! line on a display, etc.

use crate::drivers::motor_shield::ShieldStatus;
use crate::motion::DirectionCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The sequencer started; motors stay off until the first step.
    Started,

    /// A program step began and the shield was commanded.
    Step {
        command: DirectionCommand,
        status: ShieldStatus,
    },

    /// The last step of the program finished.
    CycleComplete { cycles: u32 },

    /// The sequencer was halted and the shield stopped.
    Stopped(ShieldStatus),
}

impl AppEvent {
    /// Status text for a UI line, where the event carries one.
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Self::Started => Some("Ini Motor driver"),
            Self::Step { command, .. } => Some(command.label()),
            Self::Stopped(_) => Some(DirectionCommand::Stop.label()),
            Self::CycleComplete { .. } => None,
        }
    }
}
