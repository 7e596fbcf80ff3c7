//! Swipe-to-delete gesture state machine.
//!
//! Each rendered todo owns one [`SwipeGesture`]. Touch input is fed through
//! [`SwipeGesture::apply`], a pure transition returning the next state and at
//! most one [`GestureEffect`] for the caller to carry out.
//!
//! # State Machine
//!
//! ```text
//!            start(x)              move: offset > arm_threshold
//!   Idle ─────────────► Dragging ─────────────────────────────► Armed
//!    ▲                   │  ▲ ◄───────────────────────────────── │
//!    │   end / cancel    │  │     move: offset <= arm_threshold  │
//!    ├───── SnapBack ────┘  │                                    │
//!    │                      └─ move: leftward distance <= 0      │
//!    ├───────────────────────────── end ─── Commit ──────────────┤
//!    └───────────────────────────── cancel ─ SnapBack ───────────┘
//! ```
//!
//! Leftward distance is `start_x - x`, capped at `max_offset`. Entering
//! `Armed` from another phase emits [`GestureEffect::Haptic`] once; staying
//! armed across moves does not repeat it.
//!
//! Edit mode and gesture mode are mutually exclusive: while the item is being
//! edited every event is ignored and the gesture keeps its current state.

use crate::domain::{Result, TickoffError};
use serde::{Deserialize, Serialize};

/// Phase of an item's swipe gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    /// No touch in progress.
    #[default]
    Idle,
    /// Finger down, not far enough left to delete.
    Dragging,
    /// Releasing now deletes the item.
    Armed,
}

/// Distances governing the swipe, in the host's horizontal units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwipeConfig {
    /// Offset that must be exceeded to arm the delete.
    pub arm_threshold: f64,
    /// Hard cap on how far the item follows the finger.
    pub max_offset: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            arm_threshold: 60.0,
            max_offset: 100.0,
        }
    }
}

impl SwipeConfig {
    /// Checks that both distances are finite, positive, and that the threshold
    /// is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`TickoffError::Config`] describing the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if !self.arm_threshold.is_finite() || self.arm_threshold <= 0.0 {
            return Err(TickoffError::Config(format!(
                "arm_threshold must be a positive number, got {}",
                self.arm_threshold
            )));
        }
        if !self.max_offset.is_finite() || self.max_offset <= 0.0 {
            return Err(TickoffError::Config(format!(
                "max_offset must be a positive number, got {}",
                self.max_offset
            )));
        }
        if self.arm_threshold >= self.max_offset {
            return Err(TickoffError::Config(format!(
                "arm_threshold ({}) must be below max_offset ({})",
                self.arm_threshold, self.max_offset
            )));
        }
        Ok(())
    }
}

/// Touch input for a single item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Finger down at horizontal position `x`.
    Start { x: f64 },
    /// Finger moved to horizontal position `x`.
    Move { x: f64 },
    /// Finger lifted.
    End,
    /// The host interrupted the touch.
    Cancel,
    /// The item was unmounted or lost focus mid-gesture.
    Reset,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEffect {
    /// Just armed: pulse the haptic motor.
    Haptic,
    /// Released while armed: delete the item.
    Commit,
    /// Released or cancelled without arming: animate back to offset 0.
    SnapBack,
}

/// Swipe state of one todo item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SwipeGesture {
    phase: GesturePhase,
    offset: f64,
    start_x: f64,
}

impl SwipeGesture {
    /// The resting state.
    pub const IDLE: Self = Self {
        phase: GesturePhase::Idle,
        offset: 0.0,
        start_x: 0.0,
    };

    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// How far the item is currently pulled left, `0..=max_offset`.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub const fn start_x(&self) -> f64 {
        self.start_x
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.phase == GesturePhase::Armed
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == GesturePhase::Idle
    }

    /// Computes the state following `event`.
    ///
    /// `editing` is whether the owning item is in text-edit mode.
    ///
    /// ```
    /// use tickoff::gesture::{GestureEffect, SwipeConfig, SwipeGesture, TouchEvent};
    ///
    /// let config = SwipeConfig::default();
    /// let (g, _) = SwipeGesture::IDLE.apply(TouchEvent::Start { x: 100.0 }, false, &config);
    /// let (g, effect) = g.apply(TouchEvent::Move { x: 30.0 }, false, &config);
    /// assert_eq!(effect, Some(GestureEffect::Haptic));
    /// let (g, effect) = g.apply(TouchEvent::End, false, &config);
    /// assert_eq!(effect, Some(GestureEffect::Commit));
    /// assert!(g.is_idle());
    /// ```
    #[must_use]
    pub fn apply(
        self,
        event: TouchEvent,
        editing: bool,
        config: &SwipeConfig,
    ) -> (Self, Option<GestureEffect>) {
        if editing {
            return (self, None);
        }

        match (self.phase, event) {
            (_, TouchEvent::Reset) => (Self::IDLE, None),
            (_, TouchEvent::Start { x }) => (
                Self {
                    phase: GesturePhase::Dragging,
                    offset: 0.0,
                    start_x: x,
                },
                None,
            ),
            (GesturePhase::Idle, _) => (self, None),
            (_, TouchEvent::Move { x }) => self.dragged_to(x, config),
            (GesturePhase::Armed, TouchEvent::End) => (Self::IDLE, Some(GestureEffect::Commit)),
            (_, TouchEvent::End | TouchEvent::Cancel) => {
                (Self::IDLE, Some(GestureEffect::SnapBack))
            }
        }
    }

    fn dragged_to(self, x: f64, config: &SwipeConfig) -> (Self, Option<GestureEffect>) {
        let diff = self.start_x - x;
        let diff = if diff.is_finite() { diff } else { 0.0 };

        let offset = if diff > 0.0 { diff.min(config.max_offset) } else { 0.0 };
        let phase = if offset > config.arm_threshold {
            GesturePhase::Armed
        } else {
            GesturePhase::Dragging
        };

        let effect = (phase == GesturePhase::Armed && self.phase != GesturePhase::Armed)
            .then_some(GestureEffect::Haptic);

        tracing::trace!(offset, phase = ?phase, "swipe moved");

        (Self { phase, offset, start_x: self.start_x }, effect)
    }
}
