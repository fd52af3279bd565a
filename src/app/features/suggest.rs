//! The suggestion engine's transitions.
//!
//! Every function here works on a single field. Timers and lookups are only
//! requested (as [`Command`]s); their outcomes come back as actions and are
//! checked against the field's pending slot and sequence counter before they
//! may touch the visible state.

use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, SuggestionField},
};
use crate::domain::lookup::LookupError;
use crate::domain::models::{Candidate, FieldId, NavKey};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::InputChanged(field, text) => {
            UpdateResult::Handled(input_changed(*field, state.field_mut(*field), text))
        }
        Action::KeyDown(field, key) => {
            UpdateResult::Handled(key_down(*field, state.field_mut(*field), *key))
        }
        Action::ActivateSuggestion(field, index) => {
            UpdateResult::Handled(activate(*field, state.field_mut(*field), *index))
        }
        Action::PointerOutside(field) | Action::DismissSuggestions(field) => {
            UpdateResult::Handled(dismiss(*field, state.field_mut(*field)))
        }
        Action::LookupDue(field, timer, query) => {
            UpdateResult::Handled(lookup_due(*field, state.field_mut(*field), *timer, query))
        }
        Action::LookupFinished {
            field,
            seq,
            query,
            result,
        } => {
            lookup_finished(*field, state.field_mut(*field), *seq, query, result.clone());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

pub fn input_changed(id: FieldId, field: &mut SuggestionField, text: &str) -> Option<Command> {
    if field.text() != text {
        field.set_text(text);
    }
    field.state.query = text.to_string();
    field.state.no_matches = false;

    let query = text.trim();
    if query.is_empty() {
        field.state.clear();
        field.state.invalidate();
        return Some(Command::CancelLookup(id));
    }

    schedule(id, field, query)
}

/// Arm the field's single pending slot. The runtime replaces any older timer.
pub fn schedule(id: FieldId, field: &mut SuggestionField, query: &str) -> Option<Command> {
    let timer = field.state.arm_timer(query);
    Some(Command::ScheduleLookup {
        field: id,
        timer,
        query: query.to_string(),
    })
}

/// Only the most recently armed timer may issue a lookup, even when an older
/// one carried the same text.
pub fn lookup_due(
    id: FieldId,
    field: &mut SuggestionField,
    timer: u64,
    query: &str,
) -> Option<Command> {
    if field.state.pending_timer().map(|(pending, _)| pending) != Some(timer) {
        log::debug!("{id}: ignoring superseded timer #{timer} for {query:?}");
        return None;
    }
    field.state.pending_timer = None;

    // Issued even on a cache hit so older in-flight responses become stale.
    let seq = field.state.issue_seq();

    if let Some(cached) = field.cache.get(query) {
        let cached = cached.clone();
        log::debug!("{id}: cache hit for {query:?} ({} candidates)", cached.len());
        field.state.is_loading = false;
        field.state.show(cached);
        return None;
    }

    field.state.is_loading = true;
    Some(Command::Lookup {
        field: id,
        seq,
        query: query.to_string(),
    })
}

pub fn lookup_finished(
    id: FieldId,
    field: &mut SuggestionField,
    seq: u64,
    query: &str,
    result: Result<Vec<Candidate>, LookupError>,
) {
    if !field.state.is_latest(seq) {
        log::debug!(
            "{id}: discarding stale response #{seq} for {query:?} (latest #{})",
            field.state.latest_seq()
        );
        return;
    }

    field.state.is_loading = false;
    match result {
        Ok(candidates) => {
            field.cache.insert(query, candidates.clone());
            field.state.show(candidates);
        }
        Err(e) => {
            // Failures stay silent; the list simply empties.
            log::debug!("{id}: lookup for {query:?} failed: {e}");
            field.state.clear();
        }
    }
}

pub fn key_down(id: FieldId, field: &mut SuggestionField, key: NavKey) -> Option<Command> {
    let len = field.state.candidates.len();
    if !field.state.is_open || len == 0 {
        return None;
    }

    match key {
        NavKey::Down => {
            field.state.highlighted = Some(step_highlight(field.state.highlighted, 1, len));
        }
        NavKey::Up => {
            field.state.highlighted = Some(step_highlight(field.state.highlighted, -1, len));
        }
        NavKey::Enter => {
            if let Some(index) = field.state.highlighted {
                return activate(id, field, index);
            }
        }
    }
    None
}

fn step_highlight(current: Option<usize>, delta: isize, len: usize) -> usize {
    match current {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None if delta < 0 => len - 1,
        None => 0,
    }
}

pub fn activate(id: FieldId, field: &mut SuggestionField, index: usize) -> Option<Command> {
    let candidate = field.state.candidates.get(index)?.clone();

    field.set_text(candidate.as_str());
    field.state.query = candidate.0;
    field.state.no_matches = false;
    field.state.clear();
    field.state.invalidate();
    Some(Command::CancelLookup(id))
}

/// Close the list without touching the field's text.
pub fn dismiss(id: FieldId, field: &mut SuggestionField) -> Option<Command> {
    if !field.state.is_active() {
        return None;
    }
    field.state.close();
    field.state.invalidate();
    Some(Command::CancelLookup(id))
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
