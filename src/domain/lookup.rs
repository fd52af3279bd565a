use crate::domain::models::Candidate;
use async_trait::async_trait;
use thiserror::Error;

/// Why a city lookup produced no candidates.
///
/// The engine treats every variant the same way (clear and close), the
/// distinction only matters for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("lookup service answered with status {0}")]
    Status(u16),

    #[error("malformed lookup response: {0}")]
    Malformed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityLookup: Send + Sync {
    // Candidates for `query`, in the order the service returned them
    async fn search(&self, query: &str) -> Result<Vec<Candidate>, LookupError>;
}
