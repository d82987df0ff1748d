//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the shield end to end
//! against the simulated GPIO controller.  All tests run on the host
//! (x86_64) with no real hardware required.

mod demo_flow_tests;
mod recorder;
mod shield_scenario_tests;
