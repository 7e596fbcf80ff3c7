//! Pure projections of the todo collection.
//!
//! - [`filter`]: `All` / `Active` / `Completed` views and their counts

pub mod filter;

pub use filter::{filter, FilterCounts, FilterMode};
