//! Demo sequencer.
//!
//! Cycles the shield through a fixed program of direction commands:
//!
//! ```text
//!  start ─▶ pause ─▶ step 0 ─▶ step 1 ─▶ … ─▶ step N-1 ─┐
//!             ▲                                          │
//!             └──────────────── cycle complete ◀─────────┘
//! ```
//!
//! The last command keeps running through the pause.  The sequencer is
//! driven by `tick(elapsed_ms)` from whatever loop owns the shield, so it
//! holds no timers and never re-enters the shield mid-command.

use log::info;

use crate::config::{DemoConfig, MAX_PROGRAM_STEPS};
use crate::motion::DirectionCommand;

use super::events::AppEvent;
use super::ports::{EventSink, MotionPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pause,
    Step(usize),
}

pub struct DemoSequencer {
    program: heapless::Vec<DirectionCommand, MAX_PROGRAM_STEPS>,
    step_ms: u32,
    cycle_pause_ms: u32,
    phase: Phase,
    /// Time left in the current phase.
    remaining_ms: u32,
    cycles: u32,
    running: bool,
}

impl DemoSequencer {
    /// Build a sequencer from `config`.  `Stop` entries are dropped; a
    /// zero step length is treated as 1 ms.
    pub fn new(config: &DemoConfig) -> Self {
        let program = config
            .program
            .iter()
            .copied()
            .filter(|c| *c != DirectionCommand::Stop)
            .collect();
        Self {
            program,
            step_ms: config.step_ms.max(1),
            cycle_pause_ms: config.cycle_pause_ms,
            phase: Phase::Pause,
            remaining_ms: config.cycle_pause_ms,
            cycles: 0,
            running: false,
        }
    }

    /// Begin the first pause.  Motors are untouched until it elapses.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.running = true;
        self.phase = Phase::Pause;
        self.remaining_ms = self.cycle_pause_ms;
        sink.emit(&AppEvent::Started);
        info!(
            "demo: started ({} steps, {}ms each, {}ms pause)",
            self.program.len(),
            self.step_ms,
            self.cycle_pause_ms
        );
    }

    /// Advance by `elapsed_ms`, issuing every command whose start time was
    /// crossed.
    pub fn tick(
        &mut self,
        elapsed_ms: u32,
        motion: &mut impl MotionPort,
        sink: &mut impl EventSink,
    ) {
        if !self.running || self.program.is_empty() {
            return;
        }

        let mut budget = elapsed_ms;
        while budget >= self.remaining_ms {
            budget -= self.remaining_ms;
            self.advance(motion, sink);
        }
        self.remaining_ms -= budget;
    }

    /// Stop the sequence and the shield.
    pub fn halt(&mut self, motion: &mut impl MotionPort, sink: &mut impl EventSink) {
        self.running = false;
        motion.stop();
        sink.emit(&AppEvent::Stopped(motion.status()));
        info!("demo: halted after {} cycles", self.cycles);
    }

    /// Command currently being executed, if a step is active.
    pub fn current_command(&self) -> Option<DirectionCommand> {
        match self.phase {
            Phase::Step(i) => self.program.get(i).copied(),
            Phase::Pause => None,
        }
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn advance(&mut self, motion: &mut impl MotionPort, sink: &mut impl EventSink) {
        match self.phase {
            Phase::Pause => self.begin_step(0, motion, sink),
            Phase::Step(i) if i + 1 < self.program.len() => self.begin_step(i + 1, motion, sink),
            Phase::Step(_) => {
                self.cycles = self.cycles.wrapping_add(1);
                sink.emit(&AppEvent::CycleComplete { cycles: self.cycles });
                self.phase = Phase::Pause;
                self.remaining_ms = self.cycle_pause_ms;
            }
        }
    }

    fn begin_step(
        &mut self,
        index: usize,
        motion: &mut impl MotionPort,
        sink: &mut impl EventSink,
    ) {
        let command = self.program[index];
        motion.apply(command);
        self.phase = Phase::Step(index);
        self.remaining_ms = self.step_ms;
        sink.emit(&AppEvent::Step {
            command,
            status: motion.status(),
        });
    }
}
