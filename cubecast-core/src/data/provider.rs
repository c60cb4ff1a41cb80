//! Results provider trait and structured error types.
//!
//! The ResultsProvider trait abstracts over attempt-history sources (the CSV
//! export dump, a relational store, in-memory fixtures for tests) so the
//! simulation core never talks to storage directly.

use crate::domain::{AttemptRecord, WcaId};
use thiserror::Error;

/// Structured error types for data operations.
///
/// These abort a run. A competitor with an *empty* history is not an error;
/// the provider returns an empty vector and the profile builder excludes them.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("competition not found: {id}")]
    CompetitionNotFound { id: String },

    #[error("malformed results row {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("results file not found: {path} (download the WCA export first)")]
    MissingResultsFile { path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for attempt-history sources.
///
/// `attempt_history` returns the competitor's rounds for an event within the
/// lookback window, ordered by date ascending. An unknown competitor yields
/// an empty vector, never an error.
pub trait ResultsProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    fn attempt_history(
        &self,
        event: &str,
        competitor: &WcaId,
        lookback_days: i64,
    ) -> Result<Vec<AttemptRecord>, DataError>;
}
