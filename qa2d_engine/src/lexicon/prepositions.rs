//! Common English prepositions
//!
//! The bundled list is compiled in and parsed once per process. Callers that
//! need a different list load one from disk with [`load_prepositions`].

use super::error::LexiconError;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

const BUNDLED_PREPOSITIONS: &str = include_str!("../../data/preps.txt");

static COMMON_PREPOSITIONS: OnceLock<PrepositionList> = OnceLock::new();

/// Lowercased set of prepositions, one entry per non-blank line of the source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrepositionList {
    words: BTreeSet<String>,
}

impl PrepositionList {
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_lowercase())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// The bundled list, parsed on first use
pub fn common_prepositions() -> &'static PrepositionList {
    COMMON_PREPOSITIONS.get_or_init(|| PrepositionList::parse(BUNDLED_PREPOSITIONS))
}

pub fn is_common_preposition(word: &str) -> bool {
    common_prepositions().contains(word)
}

/// Load an alternative list from a file with one preposition per line
pub fn load_prepositions(path: &Path) -> Result<PrepositionList, LexiconError> {
    let content = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
    let list = PrepositionList::parse(&content);
    if list.is_empty() {
        return Err(LexiconError::parse(
            &path.display().to_string(),
            "no prepositions found",
        ));
    }
    Ok(list)
}
