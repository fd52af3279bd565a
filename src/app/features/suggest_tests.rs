use super::*;
use crate::app::reducer;

fn cities(names: &[&str]) -> Vec<Candidate> {
    names.iter().map(|n| Candidate::from(*n)).collect()
}

fn finished(field: FieldId, seq: u64, query: &str, names: &[&str]) -> Action {
    Action::LookupFinished {
        field,
        seq,
        query: query.to_string(),
        result: Ok(cities(names)),
    }
}

fn due(field: FieldId, timer: u64, query: &str) -> Action {
    Action::LookupDue(field, timer, query.to_string())
}

/// Let the field's currently armed timer fire.
fn fire_pending(state: &mut AppState, field: FieldId) -> Option<Command> {
    let (timer, query) = state.field(field).state.pending_timer().expect("no timer armed");
    let query = query.to_string();
    reducer::update(state, Action::LookupDue(field, timer, query))
}

/// Type `text` and return the id of the timer it armed.
fn type_text(state: &mut AppState, field: FieldId, text: &str) -> u64 {
    match reducer::update(state, Action::InputChanged(field, text.to_string())) {
        Some(Command::ScheduleLookup {
            field: scheduled,
            timer,
            ref query,
        }) if scheduled == field && query == text.trim() => timer,
        other => panic!("Expected Command::ScheduleLookup, got {other:?}"),
    }
}

/// Type `text`, let the timer fire and return the issued sequence number.
fn type_and_fire(state: &mut AppState, field: FieldId, text: &str) -> u64 {
    type_text(state, field, text);
    match fire_pending(state, field) {
        Some(Command::Lookup { seq, .. }) => seq,
        other => panic!("Expected Command::Lookup, got {other:?}"),
    }
}

fn open_with(state: &mut AppState, field: FieldId, query: &str, names: &[&str]) {
    let seq = type_and_fire(state, field, query);
    reducer::update(state, finished(field, seq, query, names));
}

#[test]
fn test_typing_schedules_and_keeps_previous_list() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Pa", &["Paris", "Parma"]);

    let cmd = reducer::update(&mut state, Action::InputChanged(FieldId::From, "Pad".to_string()));

    assert_eq!(
        cmd,
        Some(Command::ScheduleLookup {
            field: FieldId::From,
            timer: 2,
            query: "Pad".to_string()
        })
    );
    assert_eq!(state.from.state.query, "Pad");
    assert_eq!(state.from.text(), "Pad");
    // no flicker: the old list stays until the debounced result arrives
    assert!(state.from.state.is_open);
    assert_eq!(state.from.state.candidates, cities(&["Paris", "Parma"]));
}

#[test]
fn test_empty_input_clears_synchronously() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris"]);

    let cmd = reducer::update(&mut state, Action::InputChanged(FieldId::From, String::new()));

    assert_eq!(cmd, Some(Command::CancelLookup(FieldId::From)));
    assert!(state.from.state.candidates.is_empty());
    assert!(!state.from.state.is_open);
    assert_eq!(state.from.state.highlighted, None);
    assert!(!state.from.state.has_pending_timer());
}

#[test]
fn test_whitespace_only_counts_as_empty() {
    let mut state = AppState::default();
    let cmd = reducer::update(&mut state, Action::InputChanged(FieldId::To, "   ".to_string()));
    assert_eq!(cmd, Some(Command::CancelLookup(FieldId::To)));
    assert_eq!(state.to.state.query, "   ");
}

#[test]
fn test_superseded_timer_is_ignored() {
    let mut state = AppState::default();
    let x_timer = type_text(&mut state, FieldId::From, "X");
    let xy_timer = type_text(&mut state, FieldId::From, "Xy");

    // A timer for "X" that slipped through must not issue a lookup
    let cmd = reducer::update(&mut state, due(FieldId::From, x_timer, "X"));
    assert_eq!(cmd, None);

    let cmd = reducer::update(&mut state, due(FieldId::From, xy_timer, "Xy"));
    assert!(matches!(cmd, Some(Command::Lookup { ref query, .. }) if query == "Xy"));
    assert!(state.from.state.is_loading);
}

#[test]
fn test_queued_timer_for_same_text_waits_for_new_quiet_period() {
    let mut state = AppState::default();
    let first = type_text(&mut state, FieldId::From, "Par");
    type_text(&mut state, FieldId::From, "Pari");
    let latest = type_text(&mut state, FieldId::From, "Par");

    // the first "Par" timer fired before the edits and is still queued
    let cmd = reducer::update(&mut state, due(FieldId::From, first, "Par"));
    assert_eq!(cmd, None);
    assert!(!state.from.state.is_loading);
    assert_eq!(state.from.state.pending_timer(), Some((latest, "Par")));

    let cmd = reducer::update(&mut state, due(FieldId::From, latest, "Par"));
    assert!(matches!(cmd, Some(Command::Lookup { ref query, .. }) if query == "Par"));
}

#[test]
fn test_stale_response_never_overwrites_newer() {
    let mut state = AppState::default();
    let old_seq = type_and_fire(&mut state, FieldId::From, "Pa");
    let new_seq = type_and_fire(&mut state, FieldId::From, "Par");
    assert!(new_seq > old_seq);

    // newer arrives first, older arrives last
    reducer::update(&mut state, finished(FieldId::From, new_seq, "Par", &["Paris", "Parma"]));
    reducer::update(&mut state, finished(FieldId::From, old_seq, "Pa", &["Palermo", "Pamplona"]));

    assert_eq!(state.from.state.candidates, cities(&["Paris", "Parma"]));
    assert!(!state.from.state.is_loading);
}

#[test]
fn test_stale_response_is_dropped_while_newer_is_in_flight() {
    let mut state = AppState::default();
    let old_seq = type_and_fire(&mut state, FieldId::From, "Pa");
    let _new_seq = type_and_fire(&mut state, FieldId::From, "Par");

    reducer::update(&mut state, finished(FieldId::From, old_seq, "Pa", &["Palermo"]));

    assert!(state.from.state.candidates.is_empty());
    assert!(state.from.state.is_loading);
    // the stale answer is not cached either
    assert!(state.from.cache.get("Pa").is_none());
}

#[test]
fn test_success_opens_list_in_service_order() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma"]);

    let s = &state.from.state;
    assert!(s.is_open);
    assert_eq!(s.candidates, cities(&["Paris", "Parma"]));
    assert_eq!(s.highlighted_index(), -1);
    assert!(!s.is_loading);
}

#[test]
fn test_empty_result_stays_closed() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::To, "Qqq", &[]);

    assert!(!state.to.state.is_open);
    assert!(state.to.state.no_matches);
}

#[test]
fn test_failure_clears_and_keeps_text() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Pa", &["Paris"]);
    let seq = type_and_fire(&mut state, FieldId::From, "Par");

    reducer::update(
        &mut state,
        Action::LookupFinished {
            field: FieldId::From,
            seq,
            query: "Par".to_string(),
            result: Err(LookupError::Transport("connection refused".to_string())),
        },
    );

    let s = &state.from.state;
    assert!(s.candidates.is_empty());
    assert!(!s.is_open);
    assert!(!s.is_loading);
    assert_eq!(s.query, "Par");
    assert_eq!(state.from.text(), "Par");
}

#[test]
fn test_status_and_malformed_errors_behave_like_transport() {
    for error in [
        LookupError::Status(500),
        LookupError::Malformed("expected a sequence".to_string()),
    ] {
        let mut state = AppState::default();
        let seq = type_and_fire(&mut state, FieldId::Search, "Rome");
        reducer::update(
            &mut state,
            Action::LookupFinished {
                field: FieldId::Search,
                seq,
                query: "Rome".to_string(),
                result: Err(error),
            },
        );
        assert!(!state.search.state.is_open);
        assert_eq!(state.search.text(), "Rome");
    }
}

#[test]
fn test_arrow_down_wraps_forward() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma", "Parnu"]);

    let mut seen = Vec::new();
    for _ in 0..4 {
        reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Down));
        seen.push(state.from.state.highlighted_index());
    }
    assert_eq!(seen, vec![0, 1, 2, 0]);
}

#[test]
fn test_arrow_up_wraps_backward() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma", "Parnu"]);

    reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Down));
    assert_eq!(state.from.state.highlighted, Some(0));
    reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Up));
    assert_eq!(state.from.state.highlighted, Some(2));
}

#[test]
fn test_arrow_up_from_nothing_goes_to_last() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma"]);

    reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Up));
    assert_eq!(state.from.state.highlighted, Some(1));
}

#[test]
fn test_keys_do_nothing_when_closed() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma"]);
    reducer::update(&mut state, Action::PointerOutside(FieldId::From));

    for key in [NavKey::Down, NavKey::Up, NavKey::Enter] {
        let cmd = reducer::update(&mut state, Action::KeyDown(FieldId::From, key));
        assert_eq!(cmd, None);
    }
    assert_eq!(state.from.state.highlighted, None);
    assert_eq!(state.from.text(), "Par");
}

#[test]
fn test_enter_without_highlight_is_noop() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris"]);

    let cmd = reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Enter));

    assert_eq!(cmd, None);
    assert!(state.from.state.is_open);
    assert_eq!(state.from.text(), "Par");
}

#[test]
fn test_par_scenario_down_down_enter() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma"]);

    reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Down));
    reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Down));
    assert_eq!(
        state.from.state.highlighted_candidate(),
        Some(&Candidate::from("Parma"))
    );

    let cmd = reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Enter));

    assert_eq!(cmd, Some(Command::CancelLookup(FieldId::From)));
    assert_eq!(state.from.text(), "Parma");
    assert_eq!(state.from.state.query, "Parma");
    assert!(!state.from.state.is_open);
    assert!(state.from.state.candidates.is_empty());
    assert_eq!(state.from.state.highlighted_index(), -1);
}

#[test]
fn test_click_activation_ignores_late_response() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::To, "Ro", &["Rome", "Rotterdam"]);
    let seq = type_and_fire(&mut state, FieldId::To, "Rot");

    reducer::update(&mut state, Action::ActivateSuggestion(FieldId::To, 1));
    reducer::update(&mut state, finished(FieldId::To, seq, "Rot", &["Rotterdam", "Rotorua"]));

    assert_eq!(state.to.text(), "Rotterdam");
    assert!(!state.to.state.is_open);
}

#[test]
fn test_activation_out_of_range_is_noop() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::To, "Ro", &["Rome"]);

    let cmd = reducer::update(&mut state, Action::ActivateSuggestion(FieldId::To, 5));

    assert_eq!(cmd, None);
    assert!(state.to.state.is_open);
}

#[test]
fn test_pointer_outside_closes_without_touching_value() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma"]);
    reducer::update(&mut state, Action::KeyDown(FieldId::From, NavKey::Down));

    let cmd = reducer::update(&mut state, Action::PointerOutside(FieldId::From));

    assert_eq!(cmd, Some(Command::CancelLookup(FieldId::From)));
    assert!(!state.from.state.is_open);
    assert_eq!(state.from.state.highlighted, None);
    assert_eq!(state.from.text(), "Par");
}

#[test]
fn test_pointer_outside_while_loading_drops_late_result() {
    let mut state = AppState::default();
    let seq = type_and_fire(&mut state, FieldId::From, "Par");
    assert!(state.from.state.is_loading);

    let cmd = reducer::update(&mut state, Action::PointerOutside(FieldId::From));
    assert_eq!(cmd, Some(Command::CancelLookup(FieldId::From)));
    assert!(!state.from.state.is_loading);

    reducer::update(&mut state, finished(FieldId::From, seq, "Par", &["Paris", "Parma"]));

    assert!(!state.from.state.is_open);
    assert!(state.from.state.candidates.is_empty());
    assert!(state.from.cache.get("Par").is_none());
    assert_eq!(state.from.text(), "Par");
}

#[test]
fn test_pointer_outside_with_armed_timer_disarms_it() {
    let mut state = AppState::default();
    let timer = type_text(&mut state, FieldId::To, "Rom");

    reducer::update(&mut state, Action::PointerOutside(FieldId::To));

    assert!(!state.to.state.has_pending_timer());
    let cmd = reducer::update(&mut state, due(FieldId::To, timer, "Rom"));
    assert_eq!(cmd, None);
}

#[test]
fn test_pointer_outside_on_idle_field_does_nothing() {
    let mut state = AppState::default();
    let cmd = reducer::update(&mut state, Action::PointerOutside(FieldId::To));
    assert_eq!(cmd, None);
}

#[test]
fn test_repeated_query_is_served_from_cache() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma"]);
    type_text(&mut state, FieldId::From, "Pa");
    type_text(&mut state, FieldId::From, "Par");

    let cmd = fire_pending(&mut state, FieldId::From);

    assert_eq!(cmd, None);
    assert!(state.from.state.is_open);
    assert_eq!(state.from.state.candidates, cities(&["Paris", "Parma"]));
}

#[test]
fn test_cache_hit_makes_in_flight_lookup_stale() {
    let mut state = AppState::default();
    open_with(&mut state, FieldId::From, "Par", &["Paris", "Parma"]);
    let in_flight = type_and_fire(&mut state, FieldId::From, "Parm");

    // back to a cached query before "Parm" answers
    type_text(&mut state, FieldId::From, "Par");
    assert_eq!(fire_pending(&mut state, FieldId::From), None);
    reducer::update(&mut state, finished(FieldId::From, in_flight, "Parm", &["Parma"]));

    assert_eq!(state.from.state.candidates, cities(&["Paris", "Parma"]));
}

#[test]
fn test_disabled_cache_always_looks_up() {
    let config = crate::config::Config {
        cache_enabled: false,
        ..Default::default()
    };
    let mut state = AppState::new(&config);
    open_with(&mut state, FieldId::From, "Par", &["Paris"]);
    type_text(&mut state, FieldId::From, "Par ");

    let cmd = fire_pending(&mut state, FieldId::From);

    assert!(matches!(cmd, Some(Command::Lookup { .. })));
}

#[test]
fn test_fields_do_not_interfere() {
    let mut state = AppState::default();
    let from_seq = type_and_fire(&mut state, FieldId::From, "Par");
    let to_seq = type_and_fire(&mut state, FieldId::To, "Rom");

    reducer::update(&mut state, finished(FieldId::To, to_seq, "Rom", &["Rome"]));
    reducer::update(&mut state, finished(FieldId::From, from_seq, "Par", &["Paris"]));
    reducer::update(&mut state, Action::KeyDown(FieldId::To, NavKey::Down));

    assert_eq!(state.from.state.candidates, cities(&["Paris"]));
    assert_eq!(state.to.state.candidates, cities(&["Rome"]));
    assert_eq!(state.from.state.highlighted, None);
    assert_eq!(state.to.state.highlighted, Some(0));
    assert!(state.search.state.candidates.is_empty());
    assert!(state.to.cache.get("Par").is_none());
}
