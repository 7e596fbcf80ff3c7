//! Domain layer for tickoff.
//!
//! Core domain types with no dependency on the store, the gesture machine or
//! any presentation concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`todo`]: The todo item and its identifier
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use tickoff::domain::{Todo, TodoId};
//!
//! let todo = Todo::new(TodoId::new(), "Buy milk".to_string(), Utc::now());
//! assert!(!todo.completed);
//! ```

pub mod error;
pub mod todo;

pub use error::{Result, TickoffError};
pub use todo::{welcome_todos, Todo, TodoId};
