//! The todo collection and its mutating operations.
//!
//! [`TodoStore`] is the single writer of the todo collection. Every operation
//! is synchronous and total: bad input (blank text, unknown id) is a silent
//! no-op. A mutation that changes the collection swaps in a brand new
//! [`TodoList`]; a no-op leaves the previous one in place, so consumers can
//! detect change with [`Arc::ptr_eq`] as well as by value.
//!
//! # Ordering
//!
//! New items are prepended, so the collection reads most-recent-first.
//!
//! # Observing changes
//!
//! Presentation code registers listeners with [`TodoStore::subscribe`]. They
//! run synchronously, in subscription order, after each mutation that changed
//! the collection.

use super::clock::Clock;
use crate::domain::{Todo, TodoId};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable snapshot of the collection.
pub type TodoList = Arc<[Todo]>;

type Listener = Box<dyn FnMut(&TodoList)>;

/// Handle returned by [`TodoStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of the todo collection.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tickoff::store::{SystemClock, TodoStore};
///
/// let mut store = TodoStore::new(Arc::new(SystemClock));
/// let id = store.add("  Buy milk  ").unwrap();
/// assert_eq!(store.todos()[0].text, "Buy milk");
///
/// store.toggle(id);
/// assert_eq!(store.completed_count(), 1);
/// assert_eq!(store.clear_completed(), 1);
/// assert!(store.is_empty());
/// ```
pub struct TodoStore {
    todos: TodoList,
    clock: Arc<dyn Clock>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            todos: Arc::from(Vec::new()),
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a store seeded with `todos`, in the given order.
    ///
    /// Seeds are held to the same invariants as added items: text is trimmed,
    /// blank items are dropped, and only the first item with a given id is
    /// kept.
    #[must_use]
    pub fn with_todos(clock: Arc<dyn Clock>, todos: Vec<Todo>) -> Self {
        let mut seen = HashSet::with_capacity(todos.len());
        let seeded: Vec<Todo> = todos
            .into_iter()
            .filter_map(|todo| {
                let text = todo.text.trim();
                if text.is_empty() {
                    tracing::warn!(todo_id = %todo.id, "dropping seed with blank text");
                    return None;
                }
                if !seen.insert(todo.id) {
                    tracing::warn!(todo_id = %todo.id, "dropping seed with duplicate id");
                    return None;
                }
                let text = text.to_string();
                Some(Todo { text, ..todo })
            })
            .collect();

        tracing::debug!(count = seeded.len(), "todo store seeded");

        Self {
            todos: Arc::from(seeded),
            ..Self::new(clock)
        }
    }

    /// Returns a cheap handle to the current collection.
    #[must_use]
    pub fn snapshot(&self) -> TodoList {
        Arc::clone(&self.todos)
    }

    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    /// Returns the clock used to stamp new items.
    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Trims `raw_text` and prepends a new active todo.
    ///
    /// Returns the new id, or `None` if the trimmed text is empty.
    pub fn add(&mut self, raw_text: &str) -> Option<TodoId> {
        let text = raw_text.trim();
        if text.is_empty() {
            tracing::debug!("ignoring add with blank text");
            return None;
        }

        let todo = Todo::new(TodoId::new(), text.to_string(), self.clock.now());
        let id = todo.id;

        let _span = tracing::debug_span!("todo_add", todo_id = %id).entered();

        let mut next = Vec::with_capacity(self.todos.len() + 1);
        next.push(todo);
        next.extend(self.todos.iter().cloned());
        self.replace(next);

        Some(id)
    }

    /// Flips the completion flag of the matching item.
    ///
    /// Returns `false` if no item has `id`.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        let _span = tracing::debug_span!("todo_toggle", todo_id = %id).entered();

        if !self.contains(id) {
            tracing::debug!("toggle target not found");
            return false;
        }

        let next = self
            .todos
            .iter()
            .map(|todo| if todo.id == id { todo.toggled() } else { todo.clone() })
            .collect();
        self.replace(next);
        true
    }

    /// Replaces the text of the matching item with trimmed `raw_text`.
    ///
    /// Blank text, an unknown id, or text identical to the current text leave
    /// the collection untouched and return `false`.
    pub fn edit(&mut self, id: TodoId, raw_text: &str) -> bool {
        let _span = tracing::debug_span!("todo_edit", todo_id = %id).entered();

        let text = raw_text.trim();
        if text.is_empty() {
            tracing::debug!("edit abandoned, blank text");
            return false;
        }

        match self.get(id) {
            None => {
                tracing::debug!("edit target not found");
                return false;
            }
            Some(todo) if todo.text == text => return false,
            Some(_) => {}
        }

        let next = self
            .todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    todo.with_text(text.to_string())
                } else {
                    todo.clone()
                }
            })
            .collect();
        self.replace(next);
        true
    }

    /// Removes the matching item.
    ///
    /// Returns `false` if no item has `id`.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let _span = tracing::debug_span!("todo_delete", todo_id = %id).entered();

        if !self.contains(id) {
            tracing::debug!("delete target not found");
            return false;
        }

        let next = self.todos.iter().filter(|todo| todo.id != id).cloned().collect();
        self.replace(next);
        true
    }

    /// Removes every completed item and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.completed_count();
        if removed == 0 {
            return 0;
        }

        let next = self.todos.iter().filter(|todo| !todo.completed).cloned().collect();
        self.replace(next);

        tracing::debug!(removed, "completed todos cleared");
        removed
    }

    /// Registers a listener called with each new snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&TodoList) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn replace(&mut self, next: Vec<Todo>) {
        self.todos = Arc::from(next);

        tracing::debug!(
            total = self.todos.len(),
            listeners = self.listeners.len(),
            "todo collection replaced"
        );

        let snapshot = Arc::clone(&self.todos);
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
