use std::fmt;

/// One suggested match returned by the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Candidate(pub String);

impl Candidate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Candidate {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Identity of an input that owns its own suggestion engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Search, // Header search bar
    From,   // Booking form: departure
    To,     // Booking form: destination
}

impl FieldId {
    /// Focus order, top of the screen first.
    pub const ALL: [FieldId; 3] = [FieldId::Search, FieldId::From, FieldId::To];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Search => "Search",
            FieldId::From => "From",
            FieldId::To => "To",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Keys the suggestion list reacts to. Everything else is text editing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
}
