//! Builders for hand-annotated sentences used across the test modules

use super::{RawToken, TokenSequence};

/// `(form, upostag, xpostag, head, deprel)` with 1-based heads, 0 = root
pub(crate) type Row<'a> = (&'a str, &'a str, &'a str, usize, &'a str);

pub(crate) fn raw(rows: &[Row<'_>]) -> Vec<RawToken> {
    rows.iter()
        .enumerate()
        .map(|(i, &(form, upos, xpos, head, deprel))| {
            RawToken::new(i + 1, form, upos, xpos, head, deprel)
        })
        .collect()
}

pub(crate) fn sentence(rows: &[Row<'_>]) -> TokenSequence {
    TokenSequence::from_raw(&raw(rows)).unwrap()
}

/// Annotated sentences shared by the analysis, placement and splicing tests
pub(crate) mod fixtures {
    use super::sentence;
    use crate::tokens::TokenSequence;

    pub(crate) fn what_do_you_like() -> TokenSequence {
        sentence(&[
            ("What", "PRON", "WP", 4, "obj"),
            ("do", "AUX", "VBP", 4, "aux"),
            ("you", "PRON", "PRP", 4, "nsubj"),
            ("like", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ])
    }

    pub(crate) fn who_is_the_president() -> TokenSequence {
        sentence(&[
            ("Who", "PRON", "WP", 4, "nsubj"),
            ("is", "AUX", "VBZ", 4, "cop"),
            ("the", "DET", "DT", 4, "det"),
            ("president", "NOUN", "NN", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ])
    }

    pub(crate) fn where_did_they_go() -> TokenSequence {
        sentence(&[
            ("Where", "ADV", "WRB", 4, "advmod"),
            ("did", "AUX", "VBD", 4, "aux"),
            ("they", "PRON", "PRP", 4, "nsubj"),
            ("go", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ])
    }

    pub(crate) fn what_happened_to_him() -> TokenSequence {
        sentence(&[
            ("What", "PRON", "WP", 2, "nsubj"),
            ("happened", "VERB", "VBD", 0, "root"),
            ("to", "ADP", "IN", 4, "case"),
            ("him", "PRON", "PRP", 2, "obl"),
            ("?", "PUNCT", ".", 2, "punct"),
        ])
    }

    pub(crate) fn what_is_the_capital_of_france() -> TokenSequence {
        sentence(&[
            ("What", "PRON", "WP", 0, "root"),
            ("is", "AUX", "VBZ", 1, "cop"),
            ("the", "DET", "DT", 4, "det"),
            ("capital", "NOUN", "NN", 1, "nsubj"),
            ("of", "ADP", "IN", 6, "case"),
            ("France", "PROPN", "NNP", 4, "nmod"),
            ("?", "PUNCT", ".", 1, "punct"),
        ])
    }

    pub(crate) fn what_did_he_do() -> TokenSequence {
        sentence(&[
            ("What", "PRON", "WP", 4, "obj"),
            ("did", "AUX", "VBD", 4, "aux"),
            ("he", "PRON", "PRP", 4, "nsubj"),
            ("do", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ])
    }

    /// "Who did she talk to ?" with a stranded preposition
    pub(crate) fn who_did_she_talk_to() -> TokenSequence {
        sentence(&[
            ("Who", "PRON", "WP", 5, "obl"),
            ("did", "AUX", "VBD", 4, "aux"),
            ("she", "PRON", "PRP", 4, "nsubj"),
            ("talk", "VERB", "VB", 0, "root"),
            ("to", "ADP", "IN", 4, "case"),
            ("?", "PUNCT", ".", 4, "punct"),
        ])
    }

    /// "How many books did you read ?"
    pub(crate) fn how_many_books() -> TokenSequence {
        sentence(&[
            ("How", "ADV", "WRB", 2, "advmod"),
            ("many", "ADJ", "JJ", 3, "amod"),
            ("books", "NOUN", "NNS", 6, "obj"),
            ("did", "AUX", "VBD", 6, "aux"),
            ("you", "PRON", "PRP", 6, "nsubj"),
            ("read", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 6, "punct"),
        ])
    }

    /// "Why did he not leave ?"
    pub(crate) fn why_did_he_not_leave() -> TokenSequence {
        sentence(&[
            ("Why", "ADV", "WRB", 5, "advmod"),
            ("did", "AUX", "VBD", 5, "aux"),
            ("he", "PRON", "PRP", 5, "nsubj"),
            ("not", "PART", "RB", 5, "advmod"),
            ("leave", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 5, "punct"),
        ])
    }

    pub(crate) fn single_word(form: &str, upos: &str, xpos: &str) -> TokenSequence {
        sentence(&[(form, upos, xpos, 0, "root")])
    }
}
