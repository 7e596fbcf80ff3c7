//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (main.rs, or any UI shell) and the
//! store, view and gesture layers. It implements the event-driven flow that
//! powers every screen.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Host
//!                                            ↓
//!                                   View Models → Render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Per-item interaction modes
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{execute, Action};
pub use handler::{handle_event, Event};
pub use modes::{FilterMode, ItemMode};
pub use state::AppState;
