//! Haptic feedback seam.
//!
//! The gesture controller only decides *when* to pulse. Hosts that own a
//! vibration motor implement [`HapticDevice`]; hosts without one pass `None`
//! to [`pulse`] and the request is dropped.

use std::time::Duration;

/// Pulse length used when the configuration does not set one.
pub const DEFAULT_PULSE_MS: u32 = 50;

/// A vibration motor, or anything standing in for one.
pub trait HapticDevice {
    fn vibrate(&self, duration: Duration);
}

/// Device that records pulses to the log instead of vibrating.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHaptics;

impl HapticDevice for LoggingHaptics {
    fn vibrate(&self, duration: Duration) {
        tracing::info!(duration_ms = duration.as_millis(), "haptic pulse");
    }
}

/// Fires a pulse on `device` if there is one.
pub fn pulse(device: Option<&dyn HapticDevice>, duration_ms: u32) {
    match device {
        Some(device) => device.vibrate(Duration::from_millis(u64::from(duration_ms))),
        None => tracing::trace!(duration_ms, "no haptic device, pulse dropped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Duration>>);

    impl HapticDevice for Recorder {
        fn vibrate(&self, duration: Duration) {
            self.0.borrow_mut().push(duration);
        }
    }

    #[test]
    fn pulse_reaches_the_device() {
        let recorder = Recorder::default();
        pulse(Some(&recorder), DEFAULT_PULSE_MS);
        assert_eq!(*recorder.0.borrow(), vec![Duration::from_millis(50)]);
    }

    #[test]
    fn missing_device_is_a_no_op() {
        pulse(None, DEFAULT_PULSE_MS);
    }
}
