//! Shield configuration parameters
//!
//! Wiring, shift-out timing, and demo-sequence settings.  Every field has a
//! default matching the reference shield; a board wired differently passes
//! a partial JSON document and only overrides what changed.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::motion::DirectionCommand;
use crate::pins::{self, LineId};

/// Maximum number of commands in the demo program (stack-allocated).
pub const MAX_PROGRAM_STEPS: usize = 8;

/// Longest accepted clock high-time (ns).
pub const MAX_CLOCK_PULSE_NS: u32 = 1_000_000;

/// Controller-native ids for the shield's eight lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinAssignment {
    /// Shift-register storage clock (ST_CP).
    pub latch: LineId,
    /// Shift-register shift clock (SH_CP).
    pub clock: LineId,
    /// Shift-register serial data (DS).
    pub data: LineId,
    /// Shift-register output enable (/OE, active low).
    pub register_enable: LineId,
    /// Motor enables, ordered M1..M4.
    pub motor_enable: [LineId; 4],
}

impl PinAssignment {
    /// All eight ids in acquisition order: latch, clock, data,
    /// register-enable, M1..M4.
    pub fn all(&self) -> [LineId; 8] {
        let [m1, m2, m3, m4] = self.motor_enable;
        [self.latch, self.clock, self.data, self.register_enable, m1, m2, m3, m4]
    }
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self {
            latch: pins::LATCH_GPIO,
            clock: pins::CLOCK_GPIO,
            data: pins::DATA_GPIO,
            register_enable: pins::REGISTER_ENABLE_GPIO,
            motor_enable: [
                pins::MOTOR1_ENABLE_GPIO,
                pins::MOTOR2_ENABLE_GPIO,
                pins::MOTOR3_ENABLE_GPIO,
                pins::MOTOR4_ENABLE_GPIO,
            ],
        }
    }
}

/// Demo sequencer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Commands run in order, then repeated.
    pub program: heapless::Vec<DirectionCommand, MAX_PROGRAM_STEPS>,
    /// How long each command runs (ms).
    pub step_ms: u32,
    /// Pause before the first command of every cycle (ms).
    pub cycle_pause_ms: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let mut program = heapless::Vec::new();
        for cmd in [
            DirectionCommand::Forward,
            DirectionCommand::Backward,
            DirectionCommand::TurnLeft,
            DirectionCommand::TurnRight,
        ] {
            // Capacity is MAX_PROGRAM_STEPS; four always fit.
            let _ = program.push(cmd);
        }
        Self {
            program,
            step_ms: 2_000,
            cycle_pause_ms: 1_000,
        }
    }
}

/// Top-level shield configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShieldConfig {
    pub pins: PinAssignment,
    /// Clock high-time per shifted bit (ns).  1..=[`MAX_CLOCK_PULSE_NS`].
    pub clock_pulse_ns: u32,
    /// Drive the motor enables high *before* shifting the new mask, as the
    /// stock shield firmware does.  When false the enables go high only
    /// after the latch, so the motors never see the previous pattern.
    pub arm_before_shift: bool,
    pub demo: DemoConfig,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            pins: PinAssignment::default(),
            clock_pulse_ns: pins::CLOCK_PULSE_NS,
            arm_before_shift: true,
            demo: DemoConfig::default(),
        }
    }
}

/// Errors from parsing or validating a [`ShieldConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    Parse,
    /// The same GPIO id is assigned to two lines.
    DuplicatePin(LineId),
    /// A GPIO id is negative.
    InvalidPin(LineId),
    /// A field failed range validation.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Parse => write!(f, "config parse failed"),
            Self::DuplicatePin(id) => write!(f, "GPIO {} assigned twice", id),
            Self::InvalidPin(id) => write!(f, "GPIO {} is not a valid line id", id),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::error::Error for ConfigError {}

impl ShieldConfig {
    /// Parse a (possibly partial) JSON document and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!("config: {}", e);
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject wiring and timing values the driver cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids = self.pins.all();
        for (i, &id) in ids.iter().enumerate() {
            if id < 0 {
                return Err(ConfigError::InvalidPin(id));
            }
            if ids[..i].contains(&id) {
                return Err(ConfigError::DuplicatePin(id));
            }
        }

        if self.clock_pulse_ns == 0 {
            return Err(ConfigError::ValidationFailed("clock_pulse_ns must be non-zero"));
        }
        if self.clock_pulse_ns > MAX_CLOCK_PULSE_NS {
            return Err(ConfigError::ValidationFailed("clock_pulse_ns above 1 ms"));
        }
        if self.demo.step_ms == 0 {
            return Err(ConfigError::ValidationFailed("demo.step_ms must be non-zero"));
        }
        if self.demo.program.is_empty() {
            return Err(ConfigError::ValidationFailed("demo.program is empty"));
        }
        if self.demo.program.contains(&DirectionCommand::Stop) {
            return Err(ConfigError::ValidationFailed("demo.program may not contain Stop"));
        }
        Ok(())
    }
}
