use crate::app::{action::Action, state::AppState};
use crate::domain::models::NavKey;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn map_event_to_actions(event: Event, app_state: &AppState) -> Vec<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return Vec::new();
            }
            vec![map_key(key, app_state)]
        }
        Event::Mouse(mouse) => map_mouse(mouse, app_state),
        Event::Resize(w, h) => vec![Action::Resize(w, h)],
        _ => Vec::new(),
    }
}

fn map_key(key: KeyEvent, app_state: &AppState) -> Action {
    let field = app_state.focused;
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc => {
            if app_state.suggestions(field).is_active() {
                Action::DismissSuggestions(field)
            } else {
                Action::Quit
            }
        }
        KeyCode::Down => Action::KeyDown(field, NavKey::Down),
        KeyCode::Up => Action::KeyDown(field, NavKey::Up),
        KeyCode::Enter => Action::KeyDown(field, NavKey::Enter),
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        _ => Action::TextAreaInput(key),
    }
}

/// A left press first dismisses every busy field it landed outside of, then
/// activates the row or focuses the input under it. Popups sit above inputs,
/// so a press on a popup's border reaches nothing below.
fn map_mouse(mouse: MouseEvent, app_state: &AppState) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Vec::new();
    }
    let (x, y) = (mouse.column, mouse.row);

    let mut actions: Vec<Action> = app_state
        .regions
        .outside(x, y)
        .into_iter()
        .filter(|field| app_state.suggestions(*field).is_active())
        .map(Action::PointerOutside)
        .collect();

    if let Some((field, row)) = app_state.regions.list_row_at(x, y) {
        actions.push(Action::ActivateSuggestion(field, row));
    } else if app_state.regions.list_at(x, y).is_some() {
        // border of an open list
    } else if let Some(field) = app_state.regions.input_at(x, y) {
        actions.push(Action::FocusField(field));
    }
    actions
}
