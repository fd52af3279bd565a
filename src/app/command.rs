use crate::domain::models::FieldId;

/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // (Re)start the field's debounce timer
    ScheduleLookup {
        field: FieldId,
        timer: u64,
        query: String,
    },
    CancelLookup(FieldId), // Drop the field's pending timer
    Lookup {
        field: FieldId,
        seq: u64,
        query: String,
    },
    Batch(Vec<Command>),
}
