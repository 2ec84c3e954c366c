//! Crate error taxonomy.
//!
//! Three classes of failure cross this core's boundary:
//! - `InvalidInput` — the caller handed us something the boundary refuses
//!   (empty problem id, blank goal text, absent user).
//! - `NoCandidates` — the ranked list came back empty; selection cannot
//!   proceed. A zero-length ranking itself is a valid value, the error only
//!   appears when a caller asks the selector to pick from it.
//! - `Store` — the problem store failed as a whole. Individual missing
//!   problems are NOT errors; extractors and ranker skip them silently.

use thiserror::Error;

/// Failure from a storage collaborator.
///
/// Lookups that simply find nothing return `Ok(None)` / an empty vec, not an
/// error. This type covers the store being unable to answer at all.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Failure from an embedding or chat provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("provider returned an unusable response: {0}")]
    BadResponse(String),
}

/// Errors surfaced by the recommendation core and progress operations.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Boundary validation failed; no work was attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The candidate pool was empty, so there is nothing to select.
    #[error("no candidate problems available for this user")]
    NoCandidates,

    /// The referenced problem does not exist in the catalog.
    /// Raised by progress toggles, never by the recommendation pipeline
    /// (which skips dangling references instead).
    #[error("problem {0} not found")]
    ProblemNotFound(crate::types::ProblemId),

    /// The problem store failed; propagated opaquely, no retries here.
    #[error(transparent)]
    Store(#[from] StoreError),
}
