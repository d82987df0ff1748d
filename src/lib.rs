//! MotorShield firmware library.
//!
//! Drives a four-channel H-bridge shield through a 74HC595 shift register
//! plus four per-motor enable lines.  All logic is hardware-agnostic and
//! runs on the host against the simulated GPIO adapter; the ESP-IDF
//! adapter is compiled only for `target_os = "espidf"`.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod motion;
pub mod pins;

pub use drivers::motor_shield::{MotorShield, ShieldPhase, ShieldState, ShieldStatus};
pub use error::{Result, ShieldError};
pub use motion::{DirectionCommand, MotorChannel};
