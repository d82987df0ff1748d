//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter     | Implements | Connects to                  |
//! |-------------|------------|------------------------------|
//! | `esp_gpio`  | GpioPort   | ESP32 GPIO matrix (raw sys)  |
//! | `sim_gpio`  | GpioPort   | In-memory bus + write trace  |
//! | `log_sink`  | EventSink  | Serial log output            |

#[cfg(all(target_os = "espidf", feature = "espidf"))]
pub mod esp_gpio;
pub mod log_sink;
pub mod sim_gpio;
