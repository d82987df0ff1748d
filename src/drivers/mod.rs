//! Shield drivers: line ownership, shift-register bus, motor controller.

pub mod delay;
pub mod line_set;
pub mod motor_shield;
pub mod shift_register;
