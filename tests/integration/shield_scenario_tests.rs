//! End-to-end scenarios: command API → shift-register bus → enable lines.

use embedded_hal::digital::PinState;
use motorshield::adapters::sim_gpio::SimGpio;
use motorshield::config::ShieldConfig;
use motorshield::drivers::delay::SpinDelay;
use motorshield::motion::{self, ChannelDrive, DirectionCommand};
use motorshield::{MotorShield, ShieldError, ShieldPhase};

use crate::recorder::{motor_enables, shield_with};

// ── init → forward → stop ────────────────────────────────────

#[test]
fn forward_then_stop() {
    let config = ShieldConfig::default();
    let (mut shield, gpio) = shield_with(&config);
    let p = &config.pins;

    shield.set_forward();

    let forward = 0x08 | 0x10 | 0x20 | 0x01;
    assert_eq!(shield.last_mask(), forward);
    assert!(shield.is_enabled());
    assert_eq!(gpio.latched_outputs(p.latch, p.clock, p.data), vec![forward]);
    assert_eq!(motor_enables(&gpio, &config), [true; 4]);

    shield.motor_stop();

    assert!(!shield.is_enabled());
    assert_eq!(shield.last_mask(), forward, "stop must not rewrite the register");
    assert_eq!(motor_enables(&gpio, &config), [false; 4]);
    assert_eq!(gpio.latched_outputs(p.latch, p.clock, p.data).len(), 1);
    assert_eq!(shield.phase(), ShieldPhase::Idle);
}

// ── Wire-level bit order ─────────────────────────────────────

#[test]
fn data_line_carries_mask_msb_first() {
    let config = ShieldConfig::default();
    let (mut shield, gpio) = shield_with(&config);
    let p = &config.pins;
    gpio.clear_trace();

    shield.set_backward(); // 0xC6 = 1100_0110

    assert_eq!(
        gpio.bits_clocked(p.clock, p.data),
        vec![true, true, false, false, false, true, true, false]
    );
}

// ── Stop from every state ────────────────────────────────────

#[test]
fn stop_reaches_idle_from_any_command() {
    let config = ShieldConfig::default();
    let commands = [
        DirectionCommand::Forward,
        DirectionCommand::Backward,
        DirectionCommand::TurnLeft,
        DirectionCommand::TurnRight,
        DirectionCommand::Stop,
    ];

    for cmd in commands {
        let (mut shield, gpio) = shield_with(&config);
        shield.run(cmd);
        shield.motor_stop();

        assert!(!shield.is_enabled(), "after {cmd:?}");
        assert_eq!(motor_enables(&gpio, &config), [false; 4], "after {cmd:?}");
        assert_eq!(gpio.level(config.pins.register_enable), Some(PinState::High));
    }
}

#[test]
fn stop_twice_is_harmless() {
    let config = ShieldConfig::default();
    let (mut shield, gpio) = shield_with(&config);

    shield.set_turn_left();
    shield.motor_stop();
    shield.motor_stop();

    assert!(!shield.is_enabled());
    assert_eq!(shield.last_mask(), motion::TURN_LEFT_MASK);
    assert_eq!(motor_enables(&gpio, &config), [false; 4]);
}

// ── Idempotence ──────────────────────────────────────────────

#[test]
fn repeating_a_command_leaves_the_same_line_state() {
    let config = ShieldConfig::default();
    let (mut once, gpio_once) = shield_with(&config);
    let (mut twice, gpio_twice) = shield_with(&config);

    once.set_turn_right();
    twice.set_turn_right();
    twice.set_turn_right();

    for id in config.pins.all() {
        assert_eq!(gpio_once.level(id), gpio_twice.level(id), "line {id}");
    }
    assert_eq!(once.status(), twice.status());
}

// ── Direction changes ────────────────────────────────────────

#[test]
fn reversing_latches_the_opposite_pattern() {
    let config = ShieldConfig::default();
    let (mut shield, _gpio) = shield_with(&config);

    shield.set_forward();
    let fwd = shield.status().channels;
    shield.set_backward();
    let back = shield.status().channels;

    for (f, b) in fwd.iter().zip(back.iter()) {
        assert_ne!(f, b);
        assert_ne!(*f, ChannelDrive::Coast);
    }
}

// ── Wiring override ──────────────────────────────────────────

#[test]
fn custom_wiring_is_honoured() {
    let config = ShieldConfig::from_json(
        r#"{"pins": {"latch": 2, "clock": 3, "data": 4, "register_enable": 5,
                     "motor_enable": [6, 7, 8, 11]}}"#,
    )
    .unwrap();
    let (mut shield, gpio) = shield_with(&config);

    shield.set_turn_left();

    assert_eq!(gpio.latched_outputs(2, 3, 4), vec![motion::TURN_LEFT_MASK]);
    assert!([6, 7, 8, 11].iter().all(|&id| gpio.is_high(id)));
    // Default pins were never touched.
    assert_eq!(gpio.level(9), None);
}

// ── Acquisition ──────────────────────────────────────────────

#[test]
fn no_controller_is_fatal() {
    let mut gpio = SimGpio::unavailable();
    let err = MotorShield::init(&mut gpio, &ShieldConfig::default(), SpinDelay)
        .err()
        .unwrap();
    assert_eq!(err, ShieldError::HardwareUnavailable);
    assert_eq!(err.to_string(), "no GPIO controller available");
}

#[test]
fn second_init_reopens_and_rezeroes() {
    let config = ShieldConfig::default();
    let mut gpio = SimGpio::new();

    let mut first = MotorShield::init(&mut gpio, &config, SpinDelay).unwrap();
    first.set_forward();
    let second = MotorShield::init(&mut gpio, &config, SpinDelay).unwrap();

    for id in config.pins.all() {
        assert_eq!(gpio.open_count(id), 2);
        assert_eq!(gpio.level(id), Some(PinState::Low), "line {id}");
    }
    assert_eq!(second.last_mask(), 0);
    assert!(!second.is_enabled());
}

// ── Shutdown ─────────────────────────────────────────────────

#[test]
fn release_leaves_everything_low_and_register_clear() {
    let config = ShieldConfig::default();
    let (mut shield, gpio) = shield_with(&config);
    let p = config.pins.clone();

    shield.set_backward();
    let _lines = shield.release();

    assert_eq!(
        gpio.latched_outputs(p.latch, p.clock, p.data),
        vec![motion::BACKWARD_MASK, 0x00]
    );
    for id in p.all() {
        assert_eq!(gpio.level(id), Some(PinState::Low), "line {id}");
    }
}
