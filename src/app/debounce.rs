use crate::app::action::Action;
use crate::domain::models::FieldId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One pending quiet-period timer per field.
///
/// Scheduling aborts the field's previous timer before arming the new one, so
/// only the last call in a burst ever posts [`Action::LookupDue`].
pub struct Debouncer {
    delay: Duration,
    pending: HashMap<FieldId, JoinHandle<()>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(
        &mut self,
        field: FieldId,
        timer: u64,
        query: String,
        tx: mpsc::Sender<Action>,
    ) {
        self.cancel(field);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::LookupDue(field, timer, query)).await;
        });
        self.pending.insert(field, handle);
    }

    /// Returns whether a timer was still waiting.
    pub fn cancel(&mut self, field: FieldId) -> bool {
        match self.pending.remove(&field) {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self, field: FieldId) -> bool {
        self.pending
            .get(&field)
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}
