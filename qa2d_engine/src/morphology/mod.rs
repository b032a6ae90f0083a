//! Verb inflection
//!
//! The engine only decides *when* a verb must change tense; producing the
//! inflected form is delegated to a [`Conjugator`]. [`EnglishConjugator`] is
//! the bundled rule-based implementation.

pub mod english;
pub mod error;

pub use english::EnglishConjugator;
pub use error::ConjugationError;

use std::fmt;

/// Inflections the transformer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inflection {
    Past,
    PresentThirdSingular,
}

impl Inflection {
    /// Fine tag given to a token after this inflection
    pub fn fine_tag(&self) -> &'static str {
        match self {
            Inflection::Past => "VBD",
            Inflection::PresentThirdSingular => "VBZ",
        }
    }
}

impl fmt::Display for Inflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inflection::Past => write!(f, "past"),
            Inflection::PresentThirdSingular => write!(f, "present 3rd person singular"),
        }
    }
}

/// Morphological collaborator; shared across batch workers
pub trait Conjugator: Send + Sync {
    /// Inflect a base-form verb
    fn conjugate(&self, verb: &str, inflection: Inflection) -> Result<String, ConjugationError>;

    /// Inflect a verb whose current fine tag is known; the tag says whether
    /// `verb` may already be inflected
    fn conjugate_tagged(
        &self,
        verb: &str,
        _fine_tag: &str,
        inflection: Inflection,
    ) -> Result<String, ConjugationError> {
        self.conjugate(verb, inflection)
    }
}
