use crate::app::{
    action::Action, command::Command, debounce::Debouncer, reducer, state::AppState,
};
use crate::domain::lookup::CityLookup;
use crate::domain::models::FieldId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Owns the state and carries out the reducer's commands.
///
/// Timers and lookups run as tokio tasks and only ever talk back through
/// `tx`; whoever owns the matching receiver feeds those actions into
/// [`Runtime::dispatch`].
pub struct Runtime {
    pub state: AppState,
    lookup: Arc<dyn CityLookup>,
    debouncer: Debouncer,
    tx: mpsc::Sender<Action>,
}

impl Runtime {
    pub fn new(
        state: AppState,
        lookup: Arc<dyn CityLookup>,
        debounce: Duration,
        tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            state,
            lookup,
            debouncer: Debouncer::new(debounce),
            tx,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        if let Some(command) = reducer::update(&mut self.state, action) {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::ScheduleLookup {
                field,
                timer,
                query,
            } => {
                self.debouncer.schedule(field, timer, query, self.tx.clone());
            }
            Command::CancelLookup(field) => {
                self.debouncer.cancel(field);
            }
            Command::Lookup { field, seq, query } => {
                spawn_lookup(self.lookup.clone(), self.tx.clone(), field, seq, query);
            }
            Command::Batch(commands) => {
                for command in commands {
                    self.execute(command);
                }
            }
        }
    }

    #[must_use]
    pub fn is_timer_pending(&self, field: FieldId) -> bool {
        self.debouncer.is_pending(field)
    }
}

pub fn spawn_lookup(
    lookup: Arc<dyn CityLookup>,
    tx: mpsc::Sender<Action>,
    field: FieldId,
    seq: u64,
    query: String,
) {
    tokio::spawn(async move {
        log::debug!("{field}: lookup #{seq} for {query:?}");
        let result = lookup.search(&query).await;
        let _ = tx
            .send(Action::LookupFinished {
                field,
                seq,
                query,
                result,
            })
            .await;
    });
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
