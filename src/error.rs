//! Error type for the motor shield driver.
//!
//! There is exactly one runtime failure: the platform has no GPIO
//! controller (or it was already handed out).  It can only surface from
//! acquisition.  Once the eight lines are open every write is infallible,
//! which the line bound `OutputPin<Error = Infallible>` encodes directly.

use core::fmt;

/// Failure raised while acquiring the shield's GPIO lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldError {
    /// No GPIO controller is present on this host, or it is already owned.
    HardwareUnavailable,
}

impl fmt::Display for ShieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardwareUnavailable => write!(f, "no GPIO controller available"),
        }
    }
}

impl core::error::Error for ShieldError {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, ShieldError>;
