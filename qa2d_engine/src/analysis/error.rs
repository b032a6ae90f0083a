//! Errors for question and answer analysis

use crate::logging::codes;
use thiserror::Error;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Reasons a pair cannot be converted at all; nothing downstream runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Question has no tokens")]
    EmptyQuestion,

    #[error("Answer has no tokens after trailing punctuation is dropped")]
    EmptyAnswer,

    #[error("{sequence} has {len} tokens, maximum allowed is {limit}")]
    TooManyTokens {
        sequence: String,
        len: usize,
        limit: usize,
    },

    #[error("Question has no token with relation 'root'")]
    MissingRoot,

    #[error("Question has no verb-like token")]
    MissingVerb,

    #[error("Question has no resolvable interrogative word")]
    UnresolvedWh,
}

impl AnalysisError {
    pub fn too_many_tokens(sequence: &str, len: usize, limit: usize) -> Self {
        Self::TooManyTokens {
            sequence: sequence.to_string(),
            len,
            limit,
        }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::EmptyQuestion => codes::analysis::EMPTY_QUESTION,
            Self::EmptyAnswer => codes::analysis::EMPTY_ANSWER,
            Self::TooManyTokens { .. } => codes::analysis::TOO_MANY_TOKENS,
            Self::MissingRoot => codes::analysis::MISSING_ROOT,
            Self::MissingVerb => codes::analysis::MISSING_VERB,
            Self::UnresolvedWh => codes::analysis::UNRESOLVED_WH,
        }
    }
}
