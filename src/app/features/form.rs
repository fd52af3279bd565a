use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::suggest,
    state::AppState,
};
use crate::domain::models::FieldId;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusField(field) => UpdateResult::Handled(focus(state, *field)),
        Action::FocusNext => {
            let next = state.focused.next();
            UpdateResult::Handled(focus(state, next))
        }
        Action::FocusPrev => {
            let prev = state.focused.prev();
            UpdateResult::Handled(focus(state, prev))
        }
        Action::TextAreaInput(key) => {
            let id = state.focused;
            let field = state.field_mut(id);
            let before = field.text();
            field.text_area.input(*key);
            let after = field.text();
            // Fields are single-line; tui-textarea still inserts newlines on Ctrl-M/Ctrl-J.
            if field.text_area.lines().len() > 1 {
                field.set_text(&after);
            }
            if after == before {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(suggest::input_changed(id, field, &after))
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        _ => UpdateResult::NotHandled,
    }
}

/// Move focus. The field being left is dismissed; the field gaining focus
/// looks its current text up again.
fn focus(state: &mut AppState, target: FieldId) -> Option<Command> {
    let previous = state.focused;
    if previous == target {
        return None;
    }
    state.focused = target;

    let mut commands = Vec::new();
    if let Some(cmd) = suggest::dismiss(previous, state.field_mut(previous)) {
        commands.push(cmd);
    }

    let field = state.field_mut(target);
    let query = field.state.query.trim().to_string();
    if !query.is_empty() {
        if let Some(cmd) = suggest::schedule(target, field, &query) {
            commands.push(cmd);
        }
    }

    match commands.len() {
        0 => None,
        1 => commands.pop(),
        _ => Some(Command::Batch(commands)),
    }
}
