use crate::app::command::Command;
use crate::domain::lookup::LookupError;
use crate::domain::models::{Candidate, FieldId, NavKey};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Focus ---
    FocusField(FieldId), // Click on an input (re-runs the lookup for its text)
    FocusNext,           // Tab
    FocusPrev,           // Shift-Tab

    // --- Text Input ---
    TextAreaInput(crossterm::event::KeyEvent), // Edit the focused field
    InputChanged(FieldId, String),             // Field text replaced

    // --- Suggestion List ---
    KeyDown(FieldId, NavKey),           // Arrow keys / Enter on the list
    ActivateSuggestion(FieldId, usize), // Click on a list row
    PointerOutside(FieldId),            // Press landed outside the field's region
    DismissSuggestions(FieldId),        // Esc while the list is open

    // --- Async Results ---
    // Sent back to the main loop by timers and lookup tasks
    LookupDue(FieldId, u64, String), // Quiet period of timer #n elapsed
    LookupFinished {
        field: FieldId,
        seq: u64,
        query: String,
        result: Result<Vec<Candidate>, LookupError>,
    },
}
