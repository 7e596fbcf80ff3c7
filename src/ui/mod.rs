//! Presentation layer.
//!
//! Drawing is left to the host. This module only defines the render-ready
//! view models the host draws from:
//!
//! ```text
//! AppState → home/todos/analytics_viewmodel → *ViewModel → host renderer
//! ```
//!
//! - [`viewmodel`]: View model types and the small display helpers they use

pub mod viewmodel;

pub use viewmodel::{
    Achievement, ActivityBar, AnalyticsViewModel, HomeViewModel, ProgressSummary, RecentItem,
    TodoRow, TodosViewModel,
};
