//! Annotated word tokens as produced by a dependency parser
use crate::lexicon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parser record in CoNLL-U field naming (`id`/`head` are 1-based, head 0 = root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToken {
    pub id: usize,
    pub form: String,
    #[serde(default)]
    pub upostag: String,
    #[serde(default)]
    pub xpostag: String,
    pub head: usize,
    #[serde(default)]
    pub deprel: String,
}

impl RawToken {
    pub fn new(id: usize, form: &str, upostag: &str, xpostag: &str, head: usize, deprel: &str) -> Self {
        Self {
            id,
            form: form.to_string(),
            upostag: upostag.to_string(),
            xpostag: xpostag.to_string(),
            head,
            deprel: deprel.to_string(),
        }
    }
}

/// A word with its annotations, positioned inside a [`TokenSequence`](super::TokenSequence).
///
/// `head` is `None` for the root of the dependency tree (and for affix words
/// the engine adds, which attach to nothing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub position: usize,
    pub surface: String,
    pub coarse_pos: String,
    pub fine_pos: String,
    pub head: Option<usize>,
    pub relation: String,
}

impl Token {
    pub fn new(
        position: usize,
        surface: &str,
        coarse_pos: &str,
        fine_pos: &str,
        head: Option<usize>,
        relation: &str,
    ) -> Self {
        Self {
            position,
            surface: surface.to_string(),
            coarse_pos: coarse_pos.to_string(),
            fine_pos: fine_pos.to_string(),
            head,
            relation: relation.to_string(),
        }
    }

    /// Bare word with only a fine tag, used for answer affixes
    pub fn affix(surface: &str, fine_pos: &str) -> Self {
        Self::new(0, surface, "", fine_pos, None, "")
    }

    pub fn lower(&self) -> String {
        self.surface.to_lowercase()
    }

    /// Fine tag starting with `V`, coarse `VERB`/`AUX`, or modal `MD`
    pub fn is_verb_like(&self) -> bool {
        self.fine_pos.starts_with('V')
            || self.coarse_pos == "VERB"
            || self.coarse_pos == "AUX"
            || self.fine_pos == "MD"
    }

    /// Forms of be/do/have, modals, and existential `there`
    pub fn is_auxiliary(&self) -> bool {
        lexicon::is_auxiliary_form(&self.lower()) || self.fine_pos == "MD" || self.surface == "there"
    }

    /// Fine tag `TO`, `IN` or `RP`
    pub fn has_preposition_tag(&self) -> bool {
        lexicon::is_preposition_tag(&self.fine_pos)
    }

    pub fn is_adverb(&self) -> bool {
        self.fine_pos.starts_with("RB")
    }

    /// Interrogative candidate: fine tag starting with `W`, excluding `that`
    pub fn is_wh_candidate(&self) -> bool {
        self.fine_pos.starts_with('W') && self.surface != "that"
    }

    /// A real word rather than punctuation or a symbol
    pub fn is_word(&self) -> bool {
        self.fine_pos
            .chars()
            .next()
            .map(|c| c.is_ascii_uppercase())
            .unwrap_or(false)
            && self.fine_pos != "SYM"
    }

    pub fn is_proper_noun(&self) -> bool {
        self.fine_pos.starts_with("NNP")
    }

    pub fn is_punctuation(&self) -> bool {
        self.coarse_pos == "PUNCT"
    }

    pub fn attaches_to(&self, governor: usize) -> bool {
        self.head == Some(governor)
    }

    /// Copy with a new surface form and fine tag (inflection changes)
    pub fn reinflected(&self, surface: &str, fine_pos: &str) -> Self {
        Self {
            surface: surface.to_string(),
            fine_pos: fine_pos.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.surface, self.fine_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(surface: &str, coarse: &str, fine: &str) -> Token {
        Token::new(0, surface, coarse, fine, None, "dep")
    }

    #[test]
    fn test_verb_like() {
        assert!(tok("ran", "VERB", "VBD").is_verb_like());
        assert!(tok("is", "AUX", "VBZ").is_verb_like());
        assert!(tok("can", "AUX", "MD").is_verb_like());
        assert!(tok("should", "X", "MD").is_verb_like());
        assert!(!tok("pizza", "NOUN", "NN").is_verb_like());
    }

    #[test]
    fn test_auxiliary_forms() {
        assert!(tok("Did", "AUX", "VBD").is_auxiliary());
        assert!(tok("been", "AUX", "VBN").is_auxiliary());
        assert!(tok("there", "PRON", "EX").is_auxiliary());
        assert!(tok("will", "AUX", "MD").is_auxiliary());
        assert!(!tok("you", "PRON", "PRP").is_auxiliary());
    }

    #[test]
    fn test_word_detection() {
        assert!(tok("store", "NOUN", "NN").is_word());
        assert!(!tok("?", "PUNCT", ".").is_word());
        assert!(!tok("$", "SYM", "SYM").is_word());
        assert!(!tok("", "X", "").is_word());
    }

    #[test]
    fn test_wh_candidate_excludes_that() {
        assert!(tok("which", "DET", "WDT").is_wh_candidate());
        assert!(!tok("that", "PRON", "WDT").is_wh_candidate());
    }

    #[test]
    fn test_raw_token_deserializes_with_missing_tags() {
        let raw: RawToken =
            serde_json::from_str(r#"{"id": 1, "form": "Who", "head": 0}"#).unwrap();
        assert_eq!(raw.form, "Who");
        assert_eq!(raw.deprel, "");
    }

    #[test]
    fn test_reinflected_keeps_tree_position() {
        let token = Token::new(3, "go", "VERB", "VB", Some(1), "root");
        let past = token.reinflected("went", "VBD");
        assert_eq!(past.surface, "went");
        assert_eq!(past.head, Some(1));
        assert_eq!(past.position, 3);
    }
}
