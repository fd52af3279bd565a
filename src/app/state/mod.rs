use crate::app::region::RegionMap;
use crate::config::Config;
use crate::domain::models::FieldId;

pub mod input;
pub mod suggestion;

// Re-exports
pub use input::AppTextArea;
pub use suggestion::{SuggestionCache, SuggestionField, SuggestionState};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub api_base_url: String,

    // --- Fields (each owns its engine) ---
    pub focused: FieldId,
    pub search: SuggestionField,
    pub from: SuggestionField,
    pub to: SuggestionField,

    // --- Pointer Regions (written by the renderer) ---
    pub regions: RegionMap,

    // --- Animation ---
    pub frame_count: u64,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            api_base_url: config.api_base_url.clone(),
            search: SuggestionField::new(config.cache_enabled),
            from: SuggestionField::new(config.cache_enabled),
            to: SuggestionField::new(config.cache_enabled),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> &SuggestionField {
        match id {
            FieldId::Search => &self.search,
            FieldId::From => &self.from,
            FieldId::To => &self.to,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut SuggestionField {
        match id {
            FieldId::Search => &mut self.search,
            FieldId::From => &mut self.from,
            FieldId::To => &mut self.to,
        }
    }

    #[must_use]
    pub fn suggestions(&self, id: FieldId) -> &SuggestionState {
        &self.field(id).state
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            api_base_url: Config::default().api_base_url,
            focused: FieldId::From,
            search: SuggestionField::default(),
            from: SuggestionField::default(),
            to: SuggestionField::default(),
            regions: RegionMap::default(),
            frame_count: 0,
        }
    }
}
