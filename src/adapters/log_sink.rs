//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC on the board).  Shield status is rendered as JSON so a
//! host-side tool can scrape it straight from the console.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::drivers::motor_shield::ShieldStatus;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

fn status_json(status: &ShieldStatus) -> String {
    serde_json::to_string(status).unwrap_or_default()
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        let text = event.status_text().unwrap_or("");
        match event {
            AppEvent::Started => {
                info!("START | {}", text);
            }
            AppEvent::Step { status, .. } => {
                info!("STEP  | {} | {}", text, status_json(status));
            }
            AppEvent::CycleComplete { cycles } => {
                info!("CYCLE | complete, total={}", cycles);
            }
            AppEvent::Stopped(status) => {
                info!("STOP  | {} | {}", text, status_json(status));
            }
        }
    }
}
