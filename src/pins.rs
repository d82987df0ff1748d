//! Default GPIO assignments for the motor shield.
//!
//! Single source of truth for the wiring between the controller header and
//! the shield.  Numbers are controller-native GPIO ids; a board wired
//! differently overrides them through [`PinAssignment`](crate::config::PinAssignment).

/// Controller-native GPIO identifier.
pub type LineId = i32;

// ---------------------------------------------------------------------------
// 74HC595 shift-register bus
// ---------------------------------------------------------------------------

/// ST_CP (storage register clock).  Shield header D12.
pub const LATCH_GPIO: LineId = 9;
/// SH_CP (shift register clock).  Shield header D4.
pub const CLOCK_GPIO: LineId = 27;
/// DS (serial data in).  Shield header D8.
pub const DATA_GPIO: LineId = 25;
/// /OE (output enable, active LOW).  Shield header D7.
pub const REGISTER_ENABLE_GPIO: LineId = 24;

// ---------------------------------------------------------------------------
// Per-motor enable lines (HIGH = channel powered)
// ---------------------------------------------------------------------------

/// M1 enable.  Shield header D11.
pub const MOTOR1_ENABLE_GPIO: LineId = 10;
/// M2 enable.  Shield header D3.
pub const MOTOR2_ENABLE_GPIO: LineId = 18;
/// M3 enable.  Shield header D6.
pub const MOTOR3_ENABLE_GPIO: LineId = 23;
/// M4 enable.  Shield header D5.
pub const MOTOR4_ENABLE_GPIO: LineId = 22;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Clock high-time while a bit is being shifted in (ns).  The 74HC595
/// needs ~20 ns at 5 V; 1 µs leaves margin for slow level shifters.
pub const CLOCK_PULSE_NS: u32 = 1_000;
