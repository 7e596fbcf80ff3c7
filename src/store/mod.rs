//! In-memory todo store.
//!
//! # Modules
//!
//! - `todo_store`: The collection owner and its mutating operations
//! - `clock`: Injected time source

pub mod clock;
pub mod todo_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use todo_store::{SubscriptionId, TodoList, TodoStore};
