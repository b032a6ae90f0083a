//! Placement errors

use crate::logging::codes;
use thiserror::Error;

pub type PlacementResult<T> = Result<T, PlacementError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// No insertion point could be derived; the pair is reported as not converted
    #[error("Cannot place answer for {gap_type} question: {reason}")]
    Unresolved { gap_type: String, reason: String },

    #[error("Insertion position {position} is outside a question of {len} tokens")]
    OutOfRange { position: usize, len: usize },
}

impl PlacementError {
    pub fn unresolved(gap_type: &str, reason: &str) -> Self {
        Self::Unresolved {
            gap_type: gap_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn out_of_range(position: usize, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::Unresolved { .. } => codes::placement::UNRESOLVED_POSITION,
            Self::OutOfRange { .. } => codes::placement::POSITION_OUT_OF_RANGE,
        }
    }
}
