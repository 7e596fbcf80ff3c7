//! Named projections over the todo collection.
//!
//! [`filter`] is pure: it never reorders, and the `Active` and `Completed`
//! views partition the `All` view.

use crate::domain::Todo;
use serde::{Deserialize, Serialize};

/// Which slice of the collection is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every item.
    #[default]
    All,
    /// Items not yet completed.
    Active,
    /// Completed items.
    Completed,
}

impl FilterMode {
    /// Every mode, in button order.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns whether `todo` belongs in this view.
    #[must_use]
    pub const fn admits(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    /// Message shown when the view has nothing in it.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No todos yet. Add one above!",
            Self::Active => "No active todos. Great job!",
            Self::Completed => "No completed todos yet.",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

/// Item counts for each view, used for filter badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl FilterCounts {
    #[must_use]
    pub fn of(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|todo| todo.completed).count();
        Self {
            all: todos.len(),
            active: todos.len() - completed,
            completed,
        }
    }

    #[must_use]
    pub const fn for_mode(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Active => self.active,
            FilterMode::Completed => self.completed,
        }
    }
}

/// Projects `todos` onto `mode`, preserving order.
///
/// ```
/// use chrono::Utc;
/// use tickoff::domain::{Todo, TodoId};
/// use tickoff::views::{filter, FilterMode};
///
/// let mut done = Todo::new(TodoId::new(), "done".into(), Utc::now());
/// done.completed = true;
/// let todos = vec![done, Todo::new(TodoId::new(), "open".into(), Utc::now())];
///
/// assert_eq!(filter(&todos, FilterMode::Active)[0].text, "open");
/// assert_eq!(filter(&todos, FilterMode::All).len(), 2);
/// ```
#[must_use]
pub fn filter(todos: &[Todo], mode: FilterMode) -> Vec<Todo> {
    todos.iter().filter(|todo| mode.admits(todo)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoId;
    use chrono::Utc;
    use proptest::prelude::*;

    fn todos_from(flags: &[bool]) -> Vec<Todo> {
        let now = Utc::now();
        flags
            .iter()
            .enumerate()
            .map(|(i, &completed)| Todo {
                id: TodoId::new(),
                text: format!("item {i}"),
                completed,
                created_at: now,
            })
            .collect()
    }

    #[test]
    fn all_returns_input_unchanged() {
        let todos = todos_from(&[true, false, true]);
        assert_eq!(filter(&todos, FilterMode::All), todos);
    }

    #[test]
    fn views_preserve_source_order() {
        let todos = todos_from(&[false, true, false, true, false]);
        let active: Vec<_> = filter(&todos, FilterMode::Active)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(active, vec!["item 0", "item 2", "item 4"]);
    }

    #[test]
    fn empty_collection_yields_empty_views() {
        for mode in FilterMode::ALL {
            assert!(filter(&[], mode).is_empty());
        }
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("Active".parse::<FilterMode>(), Ok(FilterMode::Active));
        assert_eq!("done".parse::<FilterMode>(), Ok(FilterMode::Completed));
        assert!("someday".parse::<FilterMode>().is_err());
    }

    proptest! {
        #[test]
        fn active_and_completed_partition_all(
            flags in proptest::collection::vec(any::<bool>(), 0..40)
        ) {
            let todos = todos_from(&flags);
            let all = filter(&todos, FilterMode::All);
            let active = filter(&todos, FilterMode::Active);
            let completed = filter(&todos, FilterMode::Completed);

            prop_assert_eq!(all.len(), active.len() + completed.len());
            prop_assert!(active.iter().all(|a| completed.iter().all(|c| c.id != a.id)));

            let counts = FilterCounts::of(&todos);
            prop_assert_eq!(counts.all, all.len());
            prop_assert_eq!(counts.active, active.len());
            prop_assert_eq!(counts.completed, completed.len());
        }
    }
}
