use proptest::prelude::*;
use tickoff::gesture::{GestureEffect, GesturePhase, SwipeConfig, SwipeGesture, TouchEvent};
use tickoff::{handle_event, initialize, Action, Config, Event};

fn config_without_seeds() -> Config {
    Config {
        seed_welcome_todos: false,
        ..Config::default()
    }
}

#[test]
fn long_swipe_deletes_exactly_once() {
    let mut state = initialize(&config_without_seeds());
    for text in ["keep", "swipe"] {
        handle_event(&mut state, &Event::AddTodo { text: text.to_string() });
    }
    let id = state.store.todos()[0].id;

    handle_event(&mut state, &Event::TouchStart { id, x: 100.0 });
    handle_event(&mut state, &Event::TouchMove { id, x: 30.0 });
    handle_event(&mut state, &Event::TouchEnd { id });
    assert_eq!(state.store.len(), 1);

    let (render, actions) = handle_event(&mut state, &Event::TouchEnd { id });
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.todos()[0].text, "keep");
}

#[test]
fn configured_threshold_changes_when_the_swipe_arms() {
    let config = Config {
        haptic_duration_ms: 20,
        swipe: SwipeConfig {
            arm_threshold: 20.0,
            max_offset: 40.0,
        },
        ..config_without_seeds()
    };
    let mut state = initialize(&config);
    handle_event(&mut state, &Event::AddTodo { text: "tiny swipe".to_string() });
    let id = state.store.todos()[0].id;

    handle_event(&mut state, &Event::TouchStart { id, x: 100.0 });
    let (_, actions) = handle_event(&mut state, &Event::TouchMove { id, x: 75.0 });
    assert_eq!(actions, vec![Action::Haptic { duration_ms: 20 }]);

    handle_event(&mut state, &Event::TouchMove { id, x: 0.0 });
    assert!((state.gesture(id).offset() - 40.0).abs() < f64::EPSILON);
}

#[test]
fn cancel_while_armed_keeps_the_item() {
    let mut state = initialize(&config_without_seeds());
    handle_event(&mut state, &Event::AddTodo { text: "survivor".to_string() });
    let id = state.store.todos()[0].id;

    handle_event(&mut state, &Event::TouchStart { id, x: 300.0 });
    handle_event(&mut state, &Event::TouchMove { id, x: 100.0 });
    let (_, actions) = handle_event(&mut state, &Event::TouchCancel { id });

    assert_eq!(actions, vec![Action::SnapBack { id }]);
    assert_eq!(state.store.len(), 1);
    assert!(state.todos_viewmodel().rows[0].show_swipe_hint);
}

proptest! {
    #[test]
    fn offset_stays_within_bounds(
        start in -1000.0f64..1000.0,
        moves in prop::collection::vec(-1000.0f64..1000.0, 1..20),
    ) {
        let config = SwipeConfig::default();
        let (mut gesture, _) =
            SwipeGesture::IDLE.apply(TouchEvent::Start { x: start }, false, &config);
        for x in moves {
            let (next, _) = gesture.apply(TouchEvent::Move { x }, false, &config);
            prop_assert!(next.offset() >= 0.0);
            prop_assert!(next.offset() <= config.max_offset);
            prop_assert_eq!(next.is_armed(), next.offset() > config.arm_threshold);
            gesture = next;
        }
    }

    #[test]
    fn one_haptic_per_entry_into_armed(moves in prop::collection::vec(0.0f64..200.0, 1..30)) {
        let config = SwipeConfig::default();
        let (mut gesture, _) =
            SwipeGesture::IDLE.apply(TouchEvent::Start { x: 200.0 }, false, &config);
        let mut entries = 0;
        let mut haptics = 0;
        for x in moves {
            let was_armed = gesture.is_armed();
            let (next, effect) = gesture.apply(TouchEvent::Move { x }, false, &config);
            if next.is_armed() && !was_armed {
                entries += 1;
            }
            if effect == Some(GestureEffect::Haptic) {
                haptics += 1;
            }
            gesture = next;
        }
        prop_assert_eq!(entries, haptics);
    }

    #[test]
    fn release_commits_only_when_armed(x in 0.0f64..200.0) {
        let config = SwipeConfig::default();
        let (gesture, _) = SwipeGesture::IDLE.apply(TouchEvent::Start { x: 200.0 }, false, &config);
        let (gesture, _) = gesture.apply(TouchEvent::Move { x }, false, &config);
        let armed = gesture.phase() == GesturePhase::Armed;
        let (after, effect) = gesture.apply(TouchEvent::End, false, &config);

        prop_assert!(after.is_idle());
        prop_assert_eq!(effect == Some(GestureEffect::Commit), armed);
    }
}
