//! Per-item interaction modes.
//!
//! A todo row is either being viewed or being edited. Edit mode and swipe
//! gestures are mutually exclusive: entering edit mode resets the row's
//! gesture, and touch input on an editing row is ignored.
//!
//! The list-wide [`FilterMode`] lives in [`crate::views`] and is re-exported
//! here for convenience.

pub use crate::views::FilterMode;

/// Interaction mode of a single todo row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemMode {
    /// Text is displayed; the row accepts toggles and swipes.
    #[default]
    Viewing,

    /// Text is replaced by an input holding a draft.
    ///
    /// Only active items may enter this mode.
    Editing,
}

impl ItemMode {
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}
