//! Closed English vocabularies used by the analyzer and transformer

pub mod error;
pub mod prepositions;

pub use error::LexiconError;
pub use prepositions::{common_prepositions, is_common_preposition, load_prepositions, PrepositionList};

/// Fine tags that mark a preposition or particle
pub const PREPOSITION_TAGS: &[&str] = &["TO", "IN", "RP"];

/// Do-support auxiliaries
pub const AUX_DO: &[&str] = &["do", "does", "did"];

/// Every form of the verb `do`
pub const VERB_DO: &[&str] = &["do", "does", "did", "done", "doing"];

/// Interrogatives that can stand for a subject or object noun phrase
pub const SUBJECT_WH: &[&str] = &["what", "who", "which", "whom", "whose"];

pub const AUX_BE: &[&str] = &["is", "are", "was", "were", "been", "being", "be"];

pub const AUX_HAVE: &[&str] = &["has", "have", "had"];

/// Nouns that turn `what`/`which` into a time question
pub const TIME_UNITS: &[&str] = &[
    "year",
    "month",
    "day",
    "hour",
    "decade",
    "century",
    "millennium",
    "millenium",
];

/// Nouns that turn `how` into a quantity question
pub const QUANTIFIERS: &[&str] = &["many", "much"];

/// Preposition that introduces an answer to an adverbial interrogative
pub fn wh_preposition(wh: &str) -> Option<&'static str> {
    match wh {
        "where" | "when" => Some("in"),
        "how" => Some("by"),
        "why" => Some("because"),
        _ => None,
    }
}

pub fn is_preposition_tag(tag: &str) -> bool {
    PREPOSITION_TAGS.contains(&tag)
}

/// Lowercased surface is a form of be, do or have
pub fn is_auxiliary_form(lower: &str) -> bool {
    AUX_BE.contains(&lower) || AUX_DO.contains(&lower) || AUX_HAVE.contains(&lower)
}

pub fn is_do_auxiliary(surface: &str) -> bool {
    AUX_DO.contains(&surface)
}

pub fn is_do_form(surface: &str) -> bool {
    VERB_DO.contains(&surface)
}

pub fn is_subject_wh(lower: &str) -> bool {
    SUBJECT_WH.contains(&lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wh_preposition_table() {
        assert_eq!(wh_preposition("where"), Some("in"));
        assert_eq!(wh_preposition("when"), Some("in"));
        assert_eq!(wh_preposition("how"), Some("by"));
        assert_eq!(wh_preposition("why"), Some("because"));
        assert_eq!(wh_preposition("what"), None);
    }

    #[test]
    fn test_auxiliary_forms() {
        assert!(is_auxiliary_form("were"));
        assert!(is_auxiliary_form("had"));
        assert!(is_auxiliary_form("did"));
        assert!(!is_auxiliary_form("will"));
    }

    #[test]
    fn test_do_tables_are_case_sensitive() {
        assert!(is_do_auxiliary("did"));
        assert!(!is_do_auxiliary("Did"));
        assert!(is_do_form("done"));
        assert!(!is_do_auxiliary("done"));
    }

    #[test]
    fn test_both_millennium_spellings() {
        assert!(TIME_UNITS.contains(&"millennium"));
        assert!(TIME_UNITS.contains(&"millenium"));
    }
}
