//! Fuzz target: `ShieldConfig::from_json`
//!
//! Feeds arbitrary bytes to the config loader and verifies:
//! - No panics under arbitrary input
//! - Anything accepted also passes `validate`
//! - An accepted config survives a serialize/parse cycle unchanged
//! - An accepted config brings up a shield on the simulated controller
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use motorshield::adapters::sim_gpio::SimGpio;
use motorshield::config::ShieldConfig;
use motorshield::drivers::delay::SpinDelay;
use motorshield::MotorShield;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = ShieldConfig::from_json(text) else {
        return;
    };

    assert!(config.validate().is_ok(), "accepted config fails validation");

    let json = serde_json::to_string(&config).expect("config serializes");
    let again = ShieldConfig::from_json(&json).expect("serialized config parses");
    assert_eq!(again, config);

    let mut gpio = SimGpio::new();
    let mut shield =
        MotorShield::init(&mut gpio, &config, SpinDelay).expect("sim controller present");
    for &cmd in config.demo.program.iter() {
        shield.run(cmd);
    }
    shield.motor_stop();
    assert!(!shield.is_enabled());
});
