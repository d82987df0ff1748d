//! Application core: pure logic, zero I/O.
//!
//! The demo sequencer and the port traits it and the driver meet at.  All
//! hardware access goes through [`ports`], so this layer runs unchanged on
//! the host.

pub mod events;
pub mod ports;
pub mod sequencer;
