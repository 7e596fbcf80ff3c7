use chrono::{Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tickoff::analytics::FixedActivityLog;
use tickoff::store::{FixedClock, TodoStore};
use tickoff::views::{filter, FilterCounts};
use tickoff::{handle_event, initialize_with_clock, ActivitySource, Config, Event, FilterMode};

fn quiet_config() -> Config {
    Config {
        seed_welcome_todos: false,
        ..Config::default()
    }
}

#[test]
fn store_operations_follow_the_collection_rules() {
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()));
    let mut store = TodoStore::new(clock.clone());

    let empty = store.snapshot();
    assert_eq!(store.add("   "), None);
    assert!(Arc::ptr_eq(&empty, &store.snapshot()));

    let milk = store.add("  Buy milk  ").expect("non-blank text is added");
    clock.advance(Duration::minutes(5));
    let bread = store.add("Buy bread").expect("non-blank text is added");

    assert_eq!(store.todos()[0].id, bread);
    assert_eq!(store.todos()[1].text, "Buy milk");
    assert!(!store.todos()[1].completed);
    assert!(store.todos()[0].created_at > store.todos()[1].created_at);

    let before = store.snapshot();
    assert!(!store.toggle(tickoff::TodoId::new()));
    assert!(!store.delete(tickoff::TodoId::new()));
    assert!(!store.edit(milk, "  "));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));

    assert!(store.toggle(milk));
    assert_eq!(store.clear_completed(), 1);
    assert_eq!(store.clear_completed(), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn listeners_see_each_change_once() {
    let mut store = TodoStore::new(Arc::new(tickoff::store::SystemClock));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(move |todos| sink.borrow_mut().push(todos.len()));

    let id = store.add("one").expect("added");
    store.add("   ");
    store.toggle(id);
    assert!(store.unsubscribe(subscription));
    store.delete(id);

    assert_eq!(*seen.borrow(), vec![1, 1]);
}

#[test]
fn filters_and_statistics_agree_after_a_session() {
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()));
    let mut state = initialize_with_clock(&quiet_config(), clock);

    for text in ["Plan", "Shop", "Cook", "Clean"] {
        handle_event(&mut state, &Event::AddTodo { text: text.to_string() });
    }
    let ids: Vec<_> = state.store.todos().iter().map(|todo| todo.id).collect();
    for id in &ids[..3] {
        handle_event(&mut state, &Event::ToggleTodo { id: *id });
    }

    let todos = state.store.snapshot();
    let counts = FilterCounts::of(&todos);
    let active = filter(&todos, FilterMode::Active).len();
    let completed = filter(&todos, FilterMode::Completed).len();
    assert_eq!(counts.all, active + completed);

    let stats = state.statistics();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.completion_rate, 75);
    assert_eq!(stats.streak, 3);
    assert_eq!(stats.weekly_activity, FixedActivityLog::SERIES);

    handle_event(&mut state, &Event::SetFilter { filter: FilterMode::Completed });
    let list = state.todos_viewmodel();
    assert_eq!(list.rows.len(), 3);
    assert!(list.rows.iter().all(|row| row.completed && !row.can_edit));

    handle_event(&mut state, &Event::ClearCompleted);
    let list = state.todos_viewmodel();
    assert!(list.rows.is_empty());
    assert_eq!(list.empty_message, Some(FilterMode::Completed.empty_message()));
    assert_eq!(list.clear_completed_count, None);
}

#[test]
fn edit_flow_keeps_blank_drafts_open() {
    let mut state = initialize_with_clock(
        &quiet_config(),
        Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap())),
    );
    handle_event(&mut state, &Event::AddTodo { text: "Read".to_string() });
    let id = state.store.todos()[0].id;

    handle_event(&mut state, &Event::BeginEdit { id });
    handle_event(&mut state, &Event::UpdateDraft { id, text: "   ".to_string() });
    let (render, _) = handle_event(&mut state, &Event::SaveEdit { id });
    assert!(!render);
    assert_eq!(state.todos_viewmodel().rows[0].draft.as_deref(), Some("   "));
    assert_eq!(state.store.todos()[0].text, "Read");

    handle_event(&mut state, &Event::UpdateDraft { id, text: " Read a novel ".to_string() });
    let (render, _) = handle_event(&mut state, &Event::SaveEdit { id });
    assert!(render);
    let list = state.todos_viewmodel();
    let row = &list.rows[0];
    assert_eq!(row.text, "Read a novel");
    assert!(!row.editing);
}

#[test]
fn recorded_activity_follows_the_clock() {
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()));
    let config = Config {
        activity_source: ActivitySource::Recorded,
        ..quiet_config()
    };
    let mut state = initialize_with_clock(&config, clock.clone());

    handle_event(&mut state, &Event::AddTodo { text: "Yesterday".to_string() });
    clock.advance(Duration::days(1));
    handle_event(&mut state, &Event::AddTodo { text: "Today".to_string() });
    let id = state.store.todos()[0].id;
    handle_event(&mut state, &Event::ToggleTodo { id });

    let week = state.analytics_viewmodel().stats.weekly_activity;
    assert_eq!(week[5].created, 1);
    assert_eq!(week[6].created, 1);
    assert_eq!(week[6].completed, 1);
    assert_eq!(week[6].day, chrono::Weekday::Wed);
}
