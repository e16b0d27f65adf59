//! Error types for syllabification and scoring.

use thiserror::Error;

/// Errors produced by the syllabifier and the complexity scorer.
///
/// Both are deterministic: the same input always produces the same error.
/// Callers processing batches should treat either as "this pronunciation
/// could not be handled" and skip the word rather than abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyllabifyError {
    /// A component was called with structurally malformed data
    /// (mismatched intermediate lists, or an empty syllabification
    /// passed to the scorer).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The rule pipeline produced output that does not flatten back to
    /// the original pronunciation. Usually a pronunciation with no vowel
    /// or a cluster the boundary rules do not cover.
    #[error("could not syllabify {input:?}: syllabified output was {flattened:?}")]
    Syllabification {
        input: Vec<String>,
        flattened: Vec<String>,
    },
}

impl SyllabifyError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SyllabifyError::InvalidInput {
            reason: reason.into(),
        }
    }
}
