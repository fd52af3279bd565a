use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let UpdateResult::Handled(cmd) = features::suggest::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::form::update(state, &action) {
        return cmd;
    }
    None
}
