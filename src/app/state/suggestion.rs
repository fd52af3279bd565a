use super::input::AppTextArea;
use crate::domain::models::Candidate;
use std::collections::HashMap;

/// Visible state of one field's suggestion list plus the bookkeeping that
/// keeps stale timers and responses out of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionState {
    pub query: String,
    pub candidates: Vec<Candidate>,
    pub is_open: bool,
    pub highlighted: Option<usize>,
    pub is_loading: bool,
    // Last successful lookup came back empty
    pub no_matches: bool,

    // The single armed debounce timer: its id and the query it will look up
    pub(crate) pending_timer: Option<(u64, String)>,
    // Id handed to the most recently armed timer
    pub(crate) latest_timer: u64,
    // Sequence number of the most recently issued lookup
    pub(crate) latest_seq: u64,
}

impl SuggestionState {
    /// The highlighted position with `-1` standing for "nothing highlighted".
    #[must_use]
    pub fn highlighted_index(&self) -> isize {
        self.highlighted.map_or(-1, |i| i as isize)
    }

    #[must_use]
    pub fn highlighted_candidate(&self) -> Option<&Candidate> {
        self.highlighted.and_then(|i| self.candidates.get(i))
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.pending_timer.is_some()
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<(u64, &str)> {
        self.pending_timer
            .as_ref()
            .map(|(timer, query)| (*timer, query.as_str()))
    }

    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    #[must_use]
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Anything a click outside the field would have to shut down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_open || self.is_loading || self.pending_timer.is_some()
    }

    /// Replace the pending timer with a fresh one; older ids stop matching.
    pub(crate) fn arm_timer(&mut self, query: &str) -> u64 {
        self.latest_timer += 1;
        self.pending_timer = Some((self.latest_timer, query.to_string()));
        self.latest_timer
    }

    pub(crate) fn issue_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// Forget the pending timer and make every outstanding response stale.
    pub(crate) fn invalidate(&mut self) {
        self.pending_timer = None;
        self.latest_seq += 1;
        self.is_loading = false;
    }

    pub(crate) fn show(&mut self, candidates: Vec<Candidate>) {
        self.no_matches = candidates.is_empty();
        self.is_open = !candidates.is_empty();
        self.candidates = candidates;
        self.highlighted = None;
    }

    pub(crate) fn clear(&mut self) {
        self.candidates.clear();
        self.is_open = false;
        self.highlighted = None;
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
        self.highlighted = None;
    }
}

/// Query -> candidates seen during this process. Never evicted, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionCache {
    enabled: bool,
    entries: HashMap<String, Vec<Candidate>>,
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SuggestionCache {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, query: &str) -> Option<&Vec<Candidate>> {
        self.entries.get(query)
    }

    pub fn insert(&mut self, query: &str, candidates: Vec<Candidate>) {
        if self.enabled {
            self.entries.insert(query.to_string(), candidates);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One input together with its own suggestion engine state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionField {
    pub state: SuggestionState,
    pub cache: SuggestionCache,
    pub text_area: AppTextArea<'static>,
}

impl SuggestionField {
    #[must_use]
    pub fn new(cache_enabled: bool) -> Self {
        Self {
            cache: SuggestionCache::new(cache_enabled),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text_area.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text_area = AppTextArea::with_text(text);
    }
}
