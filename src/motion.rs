//! Motor channel bit map and direction command table.
//!
//! Each of the four H-bridge channels owns two outputs of the shift
//! register, `(A, B)`.  A high / B low spins one way, the reverse spins the
//! other way, both low lets the channel coast.
//!
//! | Channel | A      | B      |
//! |---------|--------|--------|
//! | M1      | `0x04` | `0x08` |
//! | M2      | `0x02` | `0x10` |
//! | M3      | `0x20` | `0x80` |
//! | M4      | `0x01` | `0x40` |
//!
//! The direction masks below are OR-combinations of these constants,
//! evaluated at compile time.  Nothing here is derived from runtime state.

use serde::{Deserialize, Serialize};

/// One of the shield's four motor channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorChannel {
    M1,
    M2,
    M3,
    M4,
}

impl MotorChannel {
    pub const ALL: [MotorChannel; 4] = [Self::M1, Self::M2, Self::M3, Self::M4];

    /// Register bits `(A, B)` owned by this channel.
    pub const fn bits(self) -> (u8, u8) {
        match self {
            Self::M1 => (0x04, 0x08),
            Self::M2 => (0x02, 0x10),
            Self::M3 => (0x20, 0x80),
            Self::M4 => (0x01, 0x40),
        }
    }

    pub const fn a(self) -> u8 {
        self.bits().0
    }

    pub const fn b(self) -> u8 {
        self.bits().1
    }

    /// Position of this channel's enable line in the line set.
    pub const fn index(self) -> usize {
        self as usize
    }
}

use MotorChannel::{M1, M2, M3, M4};

pub const FORWARD_MASK: u8 = M1.b() | M2.b() | M3.a() | M4.a();
pub const BACKWARD_MASK: u8 = M1.a() | M2.a() | M3.b() | M4.b();
/// Left side forward, right side backward.
pub const TURN_LEFT_MASK: u8 = M1.b() | M2.b() | M3.b() | M4.b();
/// Left side backward, right side forward.
pub const TURN_RIGHT_MASK: u8 = M1.a() | M2.a() | M3.a() | M4.a();

/// A logical motion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionCommand {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Stop,
}

impl DirectionCommand {
    /// Register value for this command.  `Stop` has none: it only drops the
    /// enable lines and leaves the register untouched.
    pub const fn mask(self) -> Option<u8> {
        match self {
            Self::Forward => Some(FORWARD_MASK),
            Self::Backward => Some(BACKWARD_MASK),
            Self::TurnLeft => Some(TURN_LEFT_MASK),
            Self::TurnRight => Some(TURN_RIGHT_MASK),
            Self::Stop => None,
        }
    }

    /// Human-readable status text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Backward => "Backward",
            Self::TurnLeft => "Turn left",
            Self::TurnRight => "Turn Right",
            Self::Stop => "Stop",
        }
    }
}

/// How a single channel is driven by a register value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelDrive {
    /// Both bits low.
    Coast,
    /// A high, B low.
    A,
    /// B high, A low.
    B,
    /// Both bits high.  None of the command masks produce this.
    Brake,
}

/// Split a register value into the per-channel drive state, ordered M1..M4.
pub fn decode(mask: u8) -> [ChannelDrive; 4] {
    MotorChannel::ALL.map(|ch| {
        let (a, b) = ch.bits();
        match (mask & a != 0, mask & b != 0) {
            (false, false) => ChannelDrive::Coast,
            (true, false) => ChannelDrive::A,
            (false, true) => ChannelDrive::B,
            (true, true) => ChannelDrive::Brake,
        }
    })
}
