//! External line-scoring collaborator.
//!
//! The fallback builder may ask a remote service for per-line complexity
//! scores in one batch call. The capability is modeled as the [`LineScorer`]
//! trait so the engine can be exercised without the network: [`NullScorer`]
//! supplies no scores, and adapters fail open — any remote error degrades
//! silently to the empty map, never to the caller.

mod remote;

pub use remote::RemoteScorer;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Supplies complexity scores for exact trimmed lines of source text.
pub trait LineScorer {
    /// Returns a mapping from trimmed line text to a score in `1..=10`.
    ///
    /// Implementations never fail: on any error they return the empty map
    /// and the engine falls back to its local heuristic for every line.
    fn score_lines(&self, source: &str) -> FxHashMap<String, usize>;
}

/// Scorer that supplies no scores at all.
///
/// Default adapter when remote scoring is disabled, and the test stand-in
/// for an unreachable service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScorer;

impl LineScorer for NullScorer {
    fn score_lines(&self, _source: &str) -> FxHashMap<String, usize> {
        FxHashMap::default()
    }
}

/// Internal failures of the remote adapter.
///
/// Never escapes [`LineScorer::score_lines`]; surfaced only in debug logs
/// and from [`RemoteScorer::from_env`] when no API key is configured.
#[derive(Debug, Error)]
pub enum ScorerError {
    /// The configured API key environment variable is unset.
    #[error("missing API key: environment variable {0} is not set")]
    MissingApiKey(String),

    /// Transport-level failure (connect, timeout, read).
    #[error("request failed: {0}")]
    Request(String),

    /// Non-success HTTP status from the scoring service.
    #[error("API error: status {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The service answered with JSON the adapter does not understand.
    #[error("malformed scoring response: {0}")]
    Parse(#[from] serde_json::Error),
}
