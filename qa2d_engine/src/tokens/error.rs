//! Errors raised while building token sequences from parser output

/// Malformed parser output
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token {position} has id {found}, expected {expected}")]
    InvalidId {
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error("Token {position} ('{surface}') has head {head} outside a sentence of {len} tokens")]
    HeadOutOfRange {
        position: usize,
        surface: String,
        head: usize,
        len: usize,
    },
}

impl TokenError {
    pub fn invalid_id(position: usize, expected: usize, found: usize) -> Self {
        Self::InvalidId {
            position,
            expected,
            found,
        }
    }

    pub fn head_out_of_range(position: usize, surface: &str, head: usize, len: usize) -> Self {
        Self::HeadOutOfRange {
            position,
            surface: surface.to_string(),
            head,
            len,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::InvalidId { position, .. } | Self::HeadOutOfRange { position, .. } => *position,
        }
    }

    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::InvalidId { .. } => codes::tokens::INVALID_TOKEN_ID,
            Self::HeadOutOfRange { .. } => codes::tokens::HEAD_OUT_OF_RANGE,
        }
    }
}
