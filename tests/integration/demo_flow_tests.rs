//! Demo sequencer driving a real shield on the simulated controller.

use motorshield::app::events::AppEvent;
use motorshield::app::sequencer::DemoSequencer;
use motorshield::config::ShieldConfig;
use motorshield::motion;

use crate::recorder::{motor_enables, shield_with, RecordingSink};

#[test]
fn one_full_cycle_shifts_every_program_mask() {
    let config = ShieldConfig::default();
    let (mut shield, gpio) = shield_with(&config);
    let mut sink = RecordingSink::new();
    let mut demo = DemoSequencer::new(&config.demo);
    let p = &config.pins;

    demo.start(&mut sink);
    // 50 ms loop period, one full cycle (1 s pause + 4 × 2 s)
    for _ in 0..(9_000 / 50) {
        demo.tick(50, &mut shield, &mut sink);
    }

    assert_eq!(
        gpio.latched_outputs(p.latch, p.clock, p.data),
        vec![
            motion::FORWARD_MASK,
            motion::BACKWARD_MASK,
            motion::TURN_LEFT_MASK,
            motion::TURN_RIGHT_MASK,
        ]
    );
    assert_eq!(demo.cycles(), 1);
    assert!(shield.is_enabled());
    assert_eq!(motor_enables(&gpio, &config), [true; 4]);
}

#[test]
fn status_texts_follow_the_program() {
    let config = ShieldConfig::default();
    let (mut shield, _gpio) = shield_with(&config);
    let mut sink = RecordingSink::new();
    let mut demo = DemoSequencer::new(&config.demo);

    demo.start(&mut sink);
    demo.tick(9_000, &mut shield, &mut sink);

    assert_eq!(
        sink.status_texts(),
        vec!["Ini Motor driver", "Forward", "Backward", "Turn left", "Turn Right"]
    );
    assert_eq!(sink.events.last(), Some(&AppEvent::CycleComplete { cycles: 1 }));
}

#[test]
fn halt_mid_step_stops_the_shield() {
    let config = ShieldConfig::default();
    let (mut shield, gpio) = shield_with(&config);
    let mut sink = RecordingSink::new();
    let mut demo = DemoSequencer::new(&config.demo);

    demo.start(&mut sink);
    demo.tick(2_000, &mut shield, &mut sink);
    assert!(shield.is_enabled());

    demo.halt(&mut shield, &mut sink);

    assert!(!shield.is_enabled());
    assert_eq!(shield.last_mask(), motion::FORWARD_MASK);
    assert_eq!(motor_enables(&gpio, &config), [false; 4]);
    let Some(AppEvent::Stopped(status)) = sink.events.last() else {
        panic!("expected Stopped, got {:?}", sink.events.last());
    };
    assert!(!status.enabled);
    assert_eq!(status.last_mask, motion::FORWARD_MASK);
}

#[test]
fn custom_program_from_json() {
    let config = ShieldConfig::from_json(
        r#"{"demo": {"program": ["TurnLeft", "TurnRight"], "step_ms": 500, "cycle_pause_ms": 0}}"#,
    )
    .unwrap();
    let (mut shield, gpio) = shield_with(&config);
    let mut sink = RecordingSink::new();
    let mut demo = DemoSequencer::new(&config.demo);
    let p = &config.pins;

    demo.start(&mut sink);
    demo.tick(1_000, &mut shield, &mut sink);

    assert_eq!(
        gpio.latched_outputs(p.latch, p.clock, p.data),
        vec![motion::TURN_LEFT_MASK, motion::TURN_RIGHT_MASK, motion::TURN_LEFT_MASK]
    );
    assert_eq!(demo.cycles(), 1);
}
