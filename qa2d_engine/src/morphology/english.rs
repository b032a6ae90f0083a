//! Rule-based English conjugator
//!
//! Irregular forms come from a TOML table (bundled copy compiled in); every
//! other verb follows the regular spelling rules for `-ed` and `-s`.

use super::{ConjugationError, Conjugator, Inflection};
use crate::lexicon::LexiconError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const BUNDLED_IRREGULARS: &str = include_str!("../../data/irregular_verbs.toml");

#[derive(Debug, Clone, Default, Deserialize)]
struct IrregularForms {
    past: Option<String>,
    third: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IrregularTable {
    #[serde(default)]
    verbs: BTreeMap<String, IrregularForms>,
}

#[derive(Debug, Clone)]
pub struct EnglishConjugator {
    irregular: BTreeMap<String, IrregularForms>,
    /// Irregular inflected form -> base, so already-inflected input is recognised
    base_forms: BTreeMap<String, String>,
}

impl EnglishConjugator {
    /// Conjugator over the bundled irregular table
    pub fn new() -> Result<Self, LexiconError> {
        Self::from_toml("bundled irregular_verbs.toml", BUNDLED_IRREGULARS)
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        Self::from_toml(&path.display().to_string(), &content)
    }

    fn from_toml(origin: &str, content: &str) -> Result<Self, LexiconError> {
        let table: IrregularTable =
            toml::from_str(content).map_err(|e| LexiconError::parse(origin, &e.to_string()))?;

        let irregular: BTreeMap<String, IrregularForms> = table
            .verbs
            .into_iter()
            .map(|(verb, forms)| (verb.to_lowercase(), forms))
            .collect();

        let base_forms = irregular
            .iter()
            .flat_map(|(verb, forms)| {
                [forms.past.as_ref(), forms.third.as_ref()]
                    .into_iter()
                    .flatten()
                    .map(move |form| (form.to_lowercase(), verb.clone()))
            })
            .collect();

        Ok(Self {
            irregular,
            base_forms,
        })
    }

    pub fn irregular_count(&self) -> usize {
        self.irregular.len()
    }

    pub fn is_irregular(&self, verb: &str) -> bool {
        self.irregular.contains_key(&verb.to_lowercase())
    }

    /// Base form of an irregular inflected word, or the word itself
    fn lemma<'a>(&'a self, inflected: &'a str) -> &'a str {
        self.base_forms.get(inflected).map(String::as_str).unwrap_or(inflected)
    }

    fn past(&self, base: &str) -> String {
        match self.irregular.get(base).and_then(|f| f.past.as_ref()) {
            Some(past) => past.clone(),
            None => regular_past(base),
        }
    }

    fn third_singular(&self, base: &str) -> String {
        match self.irregular.get(base).and_then(|f| f.third.as_ref()) {
            Some(third) => third.clone(),
            None => regular_third_singular(base),
        }
    }

    fn inflect_base(&self, base: &str, inflection: Inflection) -> String {
        match inflection {
            Inflection::Past => self.past(base),
            Inflection::PresentThirdSingular => self.third_singular(base),
        }
    }
}

fn normalise(verb: &str, inflection: Inflection) -> Result<String, ConjugationError> {
    let word = verb.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        return Err(ConjugationError::unrecognized(verb, inflection));
    }
    Ok(word)
}

/// `VBD`/`VBN`: the word is already a past form
fn is_past_tag(fine_tag: &str) -> bool {
    matches!(fine_tag, "VBD" | "VBN")
}

impl Conjugator for EnglishConjugator {
    fn conjugate(&self, verb: &str, inflection: Inflection) -> Result<String, ConjugationError> {
        let base = normalise(verb, inflection)?;
        Ok(self.inflect_base(&base, inflection))
    }

    fn conjugate_tagged(
        &self,
        verb: &str,
        fine_tag: &str,
        inflection: Inflection,
    ) -> Result<String, ConjugationError> {
        let word = normalise(verb, inflection)?;

        if is_past_tag(fine_tag) {
            if inflection == Inflection::Past {
                return Ok(word);
            }
            return Ok(self.inflect_base(self.lemma(&word), inflection));
        }
        if fine_tag == "VBZ" {
            return Ok(self.inflect_base(self.lemma(&word), inflection));
        }
        Ok(self.inflect_base(&word, inflection))
    }
}

// ============================================================================
// REGULAR SPELLING RULES
// ============================================================================

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// `y` after a consonant turns into `i` before a suffix
fn ends_with_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    matches!((rev.next(), rev.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

/// Single-syllable consonant-vowel-consonant words double the final consonant
fn doubles_final_consonant(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    let (c1, v, c2) = (chars[chars.len() - 3], chars[chars.len() - 2], chars[chars.len() - 1]);
    if is_vowel(c1) || !is_vowel(v) || is_vowel(c2) || matches!(c2, 'w' | 'x' | 'y') {
        return false;
    }

    let mut vowel_groups = 0;
    let mut in_group = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            vowel_groups += 1;
        }
        in_group = vowel;
    }
    vowel_groups == 1
}

fn regular_past(verb: &str) -> String {
    if verb.ends_with('e') {
        format!("{}d", verb)
    } else if ends_with_consonant_y(verb) {
        format!("{}ied", &verb[..verb.len() - 1])
    } else if doubles_final_consonant(verb) {
        let last = verb.chars().last().map(String::from).unwrap_or_default();
        format!("{}{}ed", verb, last)
    } else {
        format!("{}ed", verb)
    }
}

fn regular_third_singular(verb: &str) -> String {
    let sibilant = ["s", "x", "z", "ch", "sh", "o"]
        .iter()
        .any(|ending| verb.ends_with(ending));

    if sibilant {
        format!("{}es", verb)
    } else if ends_with_consonant_y(verb) {
        format!("{}ies", &verb[..verb.len() - 1])
    } else {
        format!("{}s", verb)
    }
}
