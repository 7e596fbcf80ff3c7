//! Actions representing side effects to be executed by the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Everything the core can do by itself (store mutations, gesture bookkeeping)
//! has already happened by then; actions cover only what needs the host's
//! hardware or animation system.
//!
//! # Example
//!
//! ```rust
//! use tickoff::app::{execute, Action};
//! use tickoff::gesture::LoggingHaptics;
//!
//! let actions = vec![Action::Haptic { duration_ms: 50 }];
//! execute(&actions, Some(&LoggingHaptics));
//! ```

use crate::domain::TodoId;
use crate::gesture::{pulse, HapticDevice};
use serde::Serialize;

/// Commands for the host, produced by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Pulse the vibration motor.
    ///
    /// Emitted once each time a swipe crosses into the armed zone.
    Haptic {
        /// Pulse length in milliseconds.
        duration_ms: u32,
    },

    /// Animate a released swipe back to offset 0.
    ///
    /// The gesture state is already idle when this is emitted; the host only
    /// has to smooth the visual return.
    SnapBack {
        /// Row to animate.
        id: TodoId,
    },
}

/// Carries out `actions` in order.
///
/// Haptic pulses go to `haptics` when present and are dropped otherwise.
/// Snap-back animations have no in-process effect and are only logged.
pub fn execute(actions: &[Action], haptics: Option<&dyn HapticDevice>) {
    for action in actions {
        match *action {
            Action::Haptic { duration_ms } => pulse(haptics, duration_ms),
            Action::SnapBack { id } => tracing::debug!(%id, "snap back"),
        }
    }
}
