//! Answer span normalisation

use super::error::{AnalysisError, AnalysisResult};
use crate::config::compile_time::analysis::MAX_ANSWER_TOKENS;
use crate::tokens::{Token, TokenSequence};
use serde::Serialize;

/// The answer phrase that will fill the question's gap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerSpan {
    tokens: TokenSequence,
    root: Option<usize>,
    copula: Option<usize>,
}

impl AnswerSpan {
    /// Drop a trailing punctuation token and lowercase the first word unless it is a proper noun
    pub fn new(tokens: TokenSequence) -> AnalysisResult<Self> {
        if tokens.len() > MAX_ANSWER_TOKENS {
            return Err(AnalysisError::too_many_tokens(
                "Answer",
                tokens.len(),
                MAX_ANSWER_TOKENS,
            ));
        }

        let tokens = match tokens.last().map(|t| t.is_punctuation()) {
            None => return Err(AnalysisError::EmptyAnswer),
            Some(true) => tokens.without_range(tokens.len() - 1, tokens.len()),
            Some(false) => tokens,
        };
        if tokens.is_empty() {
            return Err(AnalysisError::EmptyAnswer);
        }

        let tokens = if tokens[0].is_proper_noun() {
            tokens
        } else {
            let lowered = Token {
                surface: lowercase_first(&tokens[0].surface),
                ..tokens[0].clone()
            };
            tokens.with_replaced(0, lowered)
        };

        Ok(Self::from_normalised(tokens))
    }

    fn from_normalised(tokens: TokenSequence) -> Self {
        let root = tokens.first_with_relation("root");
        let copula = tokens.first_with_relation("cop");
        Self {
            tokens,
            root,
            copula,
        }
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn copula(&self) -> Option<usize> {
        self.copula
    }

    /// Fine tag of the root, if the answer has one
    pub fn syntactic_type(&self) -> Option<&str> {
        self.root.map(|r| self.tokens[r].fine_pos.as_str())
    }

    pub fn is_verbal(&self) -> bool {
        self.syntactic_type()
            .map(|t| t.starts_with('V'))
            .unwrap_or(false)
    }

    pub fn is_nominal(&self) -> bool {
        self.syntactic_type()
            .map(|t| t.starts_with('N'))
            .unwrap_or(false)
    }

    pub fn first(&self) -> &Token {
        &self.tokens[0]
    }

    // ========================================================================
    // AFFIXES
    // ========================================================================

    /// New span with unattached words in front; root and copula indices shift
    pub fn with_prefix(&self, affixes: &[Token]) -> Self {
        Self {
            tokens: self.tokens.prepend(affixes),
            root: self.root.map(|r| r + affixes.len()),
            copula: self.copula.map(|c| c + affixes.len()),
        }
    }

    pub fn with_suffix(&self, affixes: &[Token]) -> Self {
        Self {
            tokens: self.tokens.append(affixes),
            ..self.clone()
        }
    }

    /// New span with the token at `index` swapped for `token` (tree position kept)
    pub fn with_replaced(&self, index: usize, token: Token) -> Self {
        Self {
            tokens: self.tokens.with_replaced(index, token),
            ..self.clone()
        }
    }
}

fn lowercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
