//! Shared fixtures: a shield wired to a simulated controller and an event
//! sink that keeps everything it receives.

use motorshield::adapters::sim_gpio::{SimGpio, SimLine};
use motorshield::app::events::AppEvent;
use motorshield::app::ports::EventSink;
use motorshield::config::ShieldConfig;
use motorshield::drivers::delay::SpinDelay;
use motorshield::MotorShield;

pub type SimShield = MotorShield<SimLine, SpinDelay>;

/// Bring up a shield on a fresh simulated controller.
pub fn shield_with(config: &ShieldConfig) -> (SimShield, SimGpio) {
    let mut gpio = SimGpio::new();
    let shield = MotorShield::init(&mut gpio, config, SpinDelay).expect("sim controller present");
    (shield, gpio)
}

/// Levels of the four motor enables, M1..M4.
pub fn motor_enables(gpio: &SimGpio, config: &ShieldConfig) -> [bool; 4] {
    config.pins.motor_enable.map(|id| gpio.is_high(id))
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Status lines in the order a UI would have shown them.
    pub fn status_texts(&self) -> Vec<&'static str> {
        self.events.iter().filter_map(AppEvent::status_text).collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
