//! Swipe-to-delete gesture handling.
//!
//! - [`swipe`]: The per-item state machine
//! - [`haptics`]: Optional vibration feedback when a delete arms

pub mod haptics;
pub mod swipe;

pub use haptics::{pulse, HapticDevice, LoggingHaptics, DEFAULT_PULSE_MS};
pub use swipe::{GestureEffect, GesturePhase, SwipeConfig, SwipeGesture, TouchEvent};
