//! Four-channel H-bridge motor shield driver.
//!
//! The direction of every channel comes from the 74HC595 register (see
//! [`motion`](crate::motion) for the bit map); whether a channel gets power
//! at all comes from its own enable line.  A command therefore always has
//! two halves: shift the mask, and raise the enables.
//!
//! ```text
//!            set_forward / set_backward / ...          motor_stop
//!  ┌──────┐ ─────────────▶ ┌──────────────┐ ───▶ ┌─────────┐ ─────▶ ┌──────┐
//!  │ Idle │                │ Transmitting │      │ Running │        │ Idle │
//!  └──────┘ ◀───────────── └──────────────┘      └─────────┘        └──────┘
//!                          motor_stop (any state)
//! ```
//!
//! ## Enable ordering
//!
//! With `arm_before_shift` (the default) the enables go HIGH before the new
//! mask is shifted in, so for the length of one transfer the motors run on
//! whatever pattern was latched before.  Clearing the flag raises the
//! enables only once the new mask is latched.
//!
//! ## Concurrency
//!
//! Every operation takes `&mut self`; a transfer runs to completion before
//! the call returns.  Callers sharing the shield across threads must wrap it
//! in a lock themselves.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use log::{debug, info};
use serde::Serialize;

use super::line_set::{write, LineSet};
use super::shift_register::ShiftRegister;
use crate::app::ports::{GpioPort, MotionPort};
use crate::config::ShieldConfig;
use crate::error::Result;
use crate::motion::{self, ChannelDrive, DirectionCommand};

/// Controller state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ShieldPhase {
    /// Shield disabled.
    #[default]
    Idle,
    /// Mid shift-out.  Only observable from inside a command.
    Transmitting,
    /// Shield enabled, motors driven per the last mask.
    Running,
}

/// The controller's only mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShieldState {
    /// Register output stage powered (`/OE` driven low by a command).
    pub enabled: bool,
    /// Last value shifted into the register.
    pub last_mask: u8,
}

/// Point-in-time view for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShieldStatus {
    pub enabled: bool,
    pub last_mask: u8,
    pub phase: ShieldPhase,
    /// Drive state decoded from `last_mask`, ordered M1..M4.
    pub channels: [ChannelDrive; 4],
}

pub struct MotorShield<L, D> {
    register: ShiftRegister<L, D>,
    register_enable: L,
    motor_enable: [L; 4],
    arm_before_shift: bool,
    state: ShieldState,
    phase: ShieldPhase,
}

impl<L, D> MotorShield<L, D>
where
    L: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Acquire the shield's eight lines from `gpio` and drive them LOW.
    ///
    /// Fails only when the controller is missing.  Calling this again on
    /// the same controller re-opens and re-zeroes the lines.
    pub fn init<G>(gpio: &mut G, config: &ShieldConfig, delay: D) -> Result<Self>
    where
        G: GpioPort<Line = L>,
    {
        let lines = LineSet::acquire(gpio, &config.pins)?;
        let shield = Self::from_lines(lines, config, delay);
        info!(
            "shield: ready (pulse={}ns, arm_before_shift={})",
            config.clock_pulse_ns, config.arm_before_shift
        );
        Ok(shield)
    }

    /// Build a controller around lines that are already open.
    pub fn from_lines(lines: LineSet<L>, config: &ShieldConfig, delay: D) -> Self {
        let LineSet {
            latch,
            clock,
            data,
            register_enable,
            motor_enable,
        } = lines;
        Self {
            register: ShiftRegister::new(latch, clock, data, delay, config.clock_pulse_ns),
            register_enable,
            motor_enable,
            arm_before_shift: config.arm_before_shift,
            state: ShieldState::default(),
            phase: ShieldPhase::Idle,
        }
    }

    // ── Command API ───────────────────────────────────────────

    /// Enable or disable the register outputs.  `/OE` is active low.
    ///
    /// Leaves [`phase`](Self::phase) alone: only direction commands enter
    /// `Running` and only [`motor_stop`](Self::motor_stop) returns to `Idle`.
    pub fn set_motor_shield(&mut self, on: bool) {
        write(&mut self.register_enable, PinState::from(!on));
        self.state.enabled = on;
        debug!("shield: output stage {}", if on { "on" } else { "off" });
    }

    /// Cut power to every motor and disable the shield.  The register keeps
    /// its last value.
    pub fn motor_stop(&mut self) {
        self.set_motor_enables(false);
        self.set_motor_shield(false);
        self.phase = ShieldPhase::Idle;
        info!("shield: stop (mask 0x{:02X} kept)", self.state.last_mask);
    }

    pub fn set_forward(&mut self) {
        self.run(DirectionCommand::Forward);
    }

    pub fn set_backward(&mut self) {
        self.run(DirectionCommand::Backward);
    }

    pub fn set_turn_left(&mut self) {
        self.run(DirectionCommand::TurnLeft);
    }

    pub fn set_turn_right(&mut self) {
        self.run(DirectionCommand::TurnRight);
    }

    /// Dispatch any command.
    pub fn run(&mut self, command: DirectionCommand) {
        let Some(mask) = command.mask() else {
            self.motor_stop();
            return;
        };
        self.run_motors(mask);
        self.set_motor_shield(true);
        self.phase = ShieldPhase::Running;
        info!("shield: {} (mask 0x{:02X})", command.label(), mask);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn last_mask(&self) -> u8 {
        self.state.last_mask
    }

    pub fn phase(&self) -> ShieldPhase {
        self.phase
    }

    pub fn state(&self) -> ShieldState {
        self.state
    }

    pub fn status(&self) -> ShieldStatus {
        ShieldStatus {
            enabled: self.state.enabled,
            last_mask: self.state.last_mask,
            phase: self.phase,
            channels: motion::decode(self.state.last_mask),
        }
    }

    // ── Shutdown ──────────────────────────────────────────────

    /// Stop the motors, clear the register, drive every line LOW and hand
    /// the lines back.
    ///
    /// `/OE` ends LOW as well, so the register outputs are enabled again
    /// after release.  They present the cleared `0x00`, with every motor
    /// enable LOW, so no channel is driven.
    pub fn release(mut self) -> LineSet<L> {
        self.motor_stop();
        self.register_write(0x00);

        let (latch, clock, data, _delay) = self.register.into_parts();
        let mut lines = LineSet {
            latch,
            clock,
            data,
            register_enable: self.register_enable,
            motor_enable: self.motor_enable,
        };
        lines.all_low();
        info!("shield: released");
        lines
    }

    // ── Internal ──────────────────────────────────────────────

    fn run_motors(&mut self, mask: u8) {
        self.phase = ShieldPhase::Transmitting;
        if self.arm_before_shift {
            self.set_motor_enables(true);
            self.register_write(mask);
        } else {
            self.register_write(mask);
            self.set_motor_enables(true);
        }
    }

    fn register_write(&mut self, mask: u8) {
        self.register.write(mask);
        self.state.last_mask = mask;
    }

    fn set_motor_enables(&mut self, on: bool) {
        let level = PinState::from(on);
        for line in &mut self.motor_enable {
            write(line, level);
        }
    }
}

impl<L, D> MotionPort for MotorShield<L, D>
where
    L: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    fn apply(&mut self, command: DirectionCommand) {
        self.run(command);
    }

    fn stop(&mut self) {
        self.motor_stop();
    }

    fn status(&self) -> ShieldStatus {
        MotorShield::status(self)
    }
}
