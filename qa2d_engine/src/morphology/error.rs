//! Conjugation errors

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConjugationError {
    #[error("Cannot inflect '{verb}' to {inflection}")]
    Unrecognized { verb: String, inflection: String },
}

impl ConjugationError {
    pub fn unrecognized(verb: &str, inflection: super::Inflection) -> Self {
        Self::Unrecognized {
            verb: verb.to_string(),
            inflection: inflection.to_string(),
        }
    }

    pub fn error_code(&self) -> crate::logging::codes::Code {
        crate::logging::codes::morphology::UNRECOGNIZED_VERB
    }
}
