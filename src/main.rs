//! MotorShield firmware entry point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  EspGpio (GpioPort)          LogEventSink (EventSink)     │
//! │        │                              ▲                   │
//! │        ▼                              │                   │
//! │  MotorShield ◀── MotionPort ── DemoSequencer ◀── tick()   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Single task: the main loop owns the shield and is the only caller, so a
//! shift-out can never be interleaved with another command.
#![deny(unused_must_use)]

use std::time::{Duration, Instant};

use anyhow::Result;
use esp_idf_hal::delay::Ets;
use log::info;

use motorshield::adapters::esp_gpio::EspGpio;
use motorshield::adapters::log_sink::LogEventSink;
use motorshield::app::sequencer::DemoSequencer;
use motorshield::config::ShieldConfig;
use motorshield::MotorShield;

/// Main loop period.  Demo steps are seconds long; 50 ms keeps the
/// step edges tight without spinning.
const LOOP_PERIOD: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  MotorShield v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config ─────────────────────────────────────────────
    let config = ShieldConfig::default();
    config.validate()?;

    // ── 3. Hardware ───────────────────────────────────────────
    // No controller means no motor control at all: propagate, don't retry.
    let mut gpio = EspGpio::take()?;
    let mut shield = MotorShield::init(&mut gpio, &config, Ets)?;

    // ── 4. Demo loop ──────────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut demo = DemoSequencer::new(&config.demo);
    demo.start(&mut sink);

    let mut last = Instant::now();
    loop {
        std::thread::sleep(LOOP_PERIOD);
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis() as u32;
        last = now;
        demo.tick(elapsed_ms, &mut shield, &mut sink);
    }
}
