//! Immutable token sequences
//!
//! Every edit (reordering, removal, splicing, affixing) builds a new sequence
//! in which positions are reassigned and heads are remapped to the new
//! positions of their governors. A head whose governor did not survive the
//! edit becomes `None`, so no head ever points outside the sequence.

use super::error::TokenError;
use super::token::{RawToken, Token};
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Index;

/// Which side of the governor a dependent must sit on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Anywhere,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Normalise parser records: `position = id - 1`, `head = head - 1`, head 0 is the root
    pub fn from_raw(raw: &[RawToken]) -> Result<Self, TokenError> {
        let len = raw.len();
        let mut tokens = Vec::with_capacity(len);

        for (position, record) in raw.iter().enumerate() {
            if record.id != position + 1 {
                return Err(TokenError::invalid_id(position, position + 1, record.id));
            }
            let head = match record.head {
                0 => None,
                h if h <= len => Some(h - 1),
                h => return Err(TokenError::head_out_of_range(position, &record.form, h, len)),
            };
            tokens.push(Token::new(
                position,
                &record.form,
                &record.upostag,
                &record.xpostag,
                head,
                &record.deprel,
            ));
        }

        Ok(Self { tokens })
    }

    /// Build from already-normalised tokens; positions are reassigned in order
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, TokenError> {
        let len = tokens.len();
        let mut normalised = Vec::with_capacity(len);
        for (position, token) in tokens.into_iter().enumerate() {
            if let Some(head) = token.head {
                if head >= len {
                    return Err(TokenError::head_out_of_range(position, &token.surface, head, len));
                }
            }
            normalised.push(Token { position, ..token });
        }
        Ok(Self { tokens: normalised })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn words(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.surface.clone()).collect()
    }

    /// Surface at `index`, or "" past the end
    pub fn surface_at(&self, index: usize) -> &str {
        self.tokens
            .get(index)
            .map(|t| t.surface.as_str())
            .unwrap_or("")
    }

    // ========================================================================
    // TREE QUERIES
    // ========================================================================

    /// First token whose relation begins with `prefix`
    pub fn first_with_relation_prefix(&self, prefix: &str) -> Option<usize> {
        self.tokens
            .iter()
            .position(|t| t.relation.starts_with(prefix))
    }

    /// First token whose relation is exactly `relation`
    pub fn first_with_relation(&self, relation: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t.relation == relation)
    }

    /// Dependents of `governor` in word order; an empty `relations` matches any relation
    pub fn children(&self, governor: usize, relations: &[&str], side: Side) -> Vec<usize> {
        self.tokens
            .iter()
            .filter(|t| t.attaches_to(governor))
            .filter(|t| relations.is_empty() || relations.contains(&t.relation.as_str()))
            .filter(|t| match side {
                Side::Left => t.position < governor,
                Side::Right => t.position > governor,
                Side::Anywhere => true,
            })
            .map(|t| t.position)
            .collect()
    }

    /// Whether `ancestor` is `child` or one of its first `max_hops` governors
    pub fn is_descendant(&self, child: usize, ancestor: usize, max_hops: usize) -> bool {
        if child == ancestor {
            return true;
        }
        let mut current = child;
        for _ in 0..max_hops {
            match self.tokens.get(current).and_then(|t| t.head) {
                Some(head) if head == ancestor => return true,
                Some(head) => current = head,
                None => return false,
            }
        }
        false
    }

    // ========================================================================
    // REBUILDING
    // ========================================================================

    /// Build a sequence by picking `(source, index)` tokens from several sequences.
    ///
    /// Heads are remapped inside each source; picks that do not exist are skipped.
    pub fn assemble(sources: &[&TokenSequence], picks: &[(usize, usize)]) -> TokenSequence {
        let valid: Vec<(usize, usize)> = picks
            .iter()
            .copied()
            .filter(|&(source, index)| {
                sources
                    .get(source)
                    .map(|seq| index < seq.len())
                    .unwrap_or(false)
            })
            .collect();

        let new_index: HashMap<(usize, usize), usize> = valid
            .iter()
            .enumerate()
            .map(|(new_pos, &pick)| (pick, new_pos))
            .collect();

        let tokens = valid
            .iter()
            .enumerate()
            .map(|(new_pos, &(source, index))| {
                let original = &sources[source][index];
                let head = original
                    .head
                    .and_then(|h| new_index.get(&(source, h)).copied());
                Token {
                    position: new_pos,
                    head,
                    ..original.clone()
                }
            })
            .collect();

        TokenSequence { tokens }
    }

    /// Reorder (or subset) this sequence by old indices
    pub fn rearrange(&self, order: &[usize]) -> TokenSequence {
        let picks: Vec<(usize, usize)> = order.iter().map(|&i| (0, i)).collect();
        Self::assemble(&[self], &picks)
    }

    /// Copy with the token at `index` replaced; position and head are kept
    pub fn with_replaced(&self, index: usize, token: Token) -> TokenSequence {
        let mut tokens = self.tokens.clone();
        if let Some(slot) = tokens.get_mut(index) {
            *slot = Token {
                position: index,
                head: slot.head,
                ..token
            };
        }
        TokenSequence { tokens }
    }

    /// New sequence with `affixes` before the existing tokens
    pub fn prepend(&self, affixes: &[Token]) -> TokenSequence {
        let shift = affixes.len();
        let mut tokens: Vec<Token> = affixes
            .iter()
            .cloned()
            .map(|t| Token { head: None, ..t })
            .collect();
        tokens.extend(self.tokens.iter().map(|t| Token {
            head: t.head.map(|h| h + shift),
            ..t.clone()
        }));
        Self::renumbered(tokens)
    }

    /// New sequence with `affixes` after the existing tokens
    pub fn append(&self, affixes: &[Token]) -> TokenSequence {
        let mut tokens = self.tokens.clone();
        tokens.extend(affixes.iter().cloned().map(|t| Token { head: None, ..t }));
        Self::renumbered(tokens)
    }

    /// Copy without the tokens in `start..end` (heads into the removed range become `None`)
    pub fn without_range(&self, start: usize, end: usize) -> TokenSequence {
        let order: Vec<usize> = (0..self.len())
            .filter(|&i| i < start || i >= end)
            .collect();
        self.rearrange(&order)
    }

    fn renumbered(tokens: Vec<Token>) -> TokenSequence {
        TokenSequence {
            tokens: tokens
                .into_iter()
                .enumerate()
                .map(|(position, t)| Token { position, ..t })
                .collect(),
        }
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::test_support::sentence;
    use assert_matches::assert_matches;

    fn what_do_you_like() -> TokenSequence {
        sentence(&[
            ("What", "PRON", "WP", 4, "obj"),
            ("do", "AUX", "VBP", 4, "aux"),
            ("you", "PRON", "PRP", 4, "nsubj"),
            ("like", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ])
    }

    #[test]
    fn test_from_raw_normalises_ids_and_heads() {
        let seq = what_do_you_like();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq[0].position, 0);
        assert_eq!(seq[0].head, Some(3));
        assert_eq!(seq[3].head, None);
    }

    #[test]
    fn test_from_raw_rejects_bad_head() {
        let raw = vec![
            RawToken::new(1, "Who", "PRON", "WP", 0, "root"),
            RawToken::new(2, "?", "PUNCT", ".", 7, "punct"),
        ];
        assert_matches!(
            TokenSequence::from_raw(&raw),
            Err(TokenError::HeadOutOfRange { position: 1, head: 7, .. })
        );
    }

    #[test]
    fn test_from_raw_rejects_gap_in_ids() {
        let raw = vec![
            RawToken::new(1, "Who", "PRON", "WP", 0, "root"),
            RawToken::new(3, "?", "PUNCT", ".", 1, "punct"),
        ];
        assert_matches!(
            TokenSequence::from_raw(&raw),
            Err(TokenError::InvalidId { expected: 2, found: 3, .. })
        );
    }

    #[test]
    fn test_children_by_side() {
        let seq = what_do_you_like();
        assert_eq!(seq.children(3, &["aux"], Side::Anywhere), vec![1]);
        assert_eq!(seq.children(3, &[], Side::Left), vec![0, 1, 2]);
        assert_eq!(seq.children(3, &[], Side::Right), vec![4]);
        assert!(seq.children(3, &["xcomp"], Side::Right).is_empty());
    }

    #[test]
    fn test_is_descendant_is_bounded() {
        let seq = what_do_you_like();
        assert!(seq.is_descendant(0, 3, 6));
        assert!(seq.is_descendant(2, 2, 0));
        assert!(!seq.is_descendant(0, 2, 6));

        // Cyclic heads terminate after the hop limit
        let cyclic = TokenSequence::from_tokens(vec![
            Token::new(0, "a", "X", "X", Some(1), "dep"),
            Token::new(0, "b", "X", "X", Some(0), "dep"),
            Token::new(0, "c", "X", "X", None, "root"),
        ])
        .unwrap();
        assert!(!cyclic.is_descendant(0, 2, 6));
    }

    #[test]
    fn test_rearrange_remaps_heads() {
        let seq = what_do_you_like();
        let moved = seq.rearrange(&[0, 2, 1, 3, 4]);
        assert_eq!(moved.words(), vec!["What", "you", "do", "like", "?"]);
        assert_eq!(moved[2].surface, "do");
        assert_eq!(moved[2].head, Some(3));
        assert_eq!(moved[1].position, 1);
    }

    #[test]
    fn test_removal_drops_dangling_heads() {
        let seq = what_do_you_like();
        let removed = seq.without_range(3, 4);
        assert_eq!(removed.len(), 4);
        for token in removed.iter() {
            assert!(token.head.map(|h| h < removed.len()).unwrap_or(true));
        }
        assert_eq!(removed[0].head, None);
    }

    #[test]
    fn test_assemble_keeps_heads_inside_each_source() {
        let question = what_do_you_like();
        let answer = sentence(&[
            ("cold", "ADJ", "JJ", 2, "amod"),
            ("pizza", "NOUN", "NN", 0, "root"),
        ]);
        let built = TokenSequence::assemble(
            &[&question, &answer],
            &[(0, 2), (0, 3), (1, 0), (1, 1), (0, 4)],
        );
        assert_eq!(built.words(), vec!["you", "like", "cold", "pizza", "?"]);
        assert_eq!(built[0].head, Some(1));
        assert_eq!(built[2].head, Some(3));
        assert_eq!(built[3].head, None);
        assert_eq!(built[4].head, Some(1));
    }

    #[test]
    fn test_prepend_shifts_heads() {
        let answer = sentence(&[
            ("the", "DET", "DT", 2, "det"),
            ("store", "NOUN", "NN", 0, "root"),
        ]);
        let affixed = answer.prepend(&[Token::affix("in", "IN")]);
        assert_eq!(affixed.words(), vec!["in", "the", "store"]);
        assert_eq!(affixed[1].head, Some(2));
        assert_eq!(affixed[0].head, None);
        assert_eq!(affixed[2].position, 2);
    }

    #[test]
    fn test_with_replaced_keeps_head() {
        let seq = what_do_you_like();
        let changed = seq.with_replaced(3, seq[3].reinflected("likes", "VBZ"));
        assert_eq!(changed[3].surface, "likes");
        assert_eq!(changed[3].head, None);
        assert_eq!(seq[3].surface, "like");
    }
}
