use crate::analysis::AnalysisError;
use crate::classification::PlacementError;
use crate::lexicon::LexiconError;
use crate::logging::codes;
use crate::morphology::ConjugationError;
use crate::tokens::TokenError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Malformed input: {0}")]
    Token(#[from] TokenError),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Placement failed: {0}")]
    Placement(#[from] PlacementError),

    #[error("Conjugation failed: {0}")]
    Conjugation(#[from] ConjugationError),

    #[error("Lexicon unavailable: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::Token(e) => e.error_code(),
            Self::Analysis(e) => e.error_code(),
            Self::Placement(e) => e.error_code(),
            Self::Conjugation(e) => e.error_code(),
            Self::Lexicon(e) => e.error_code(),
            Self::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    /// Rejections mean "no conversion possible" rather than a fault
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Analysis(_) | Self::Placement(_))
    }
}
