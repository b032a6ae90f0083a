//! Extent of the interrogative phrase

use crate::analysis::Question;
use crate::utils::TokenRange;

/// Inclusive range of tokens that make up the wh-phrase.
///
/// Grows left over prepositions ("*in* which year") and right over the
/// phrase's non-verbal dependents, `of`, and the `happened (to)` idiom.
pub fn wh_span(question: &Question) -> TokenRange {
    let tokens = question.tokens();
    let wh = question.wh();
    let wh_word = question.wh_word();

    let mut span = TokenRange::single(wh);
    let mut heads = vec![tokens[wh].head];

    for i in (0..wh).rev() {
        let token = &tokens[i];
        // "... want to do what ?"
        let infinitive_do = wh_word == "what"
            && i + 1 == wh
            && token.surface == "do"
            && wh >= 2
            && tokens[wh - 2].surface == "to";

        if token.has_preposition_tag() || infinitive_do {
            span = span.extend_to(i);
            heads.push(token.head);
        } else {
            break;
        }
    }

    let boundary = question.copula().unwrap_or(question.root());
    for i in (wh + 1)..tokens.len() {
        let token = &tokens[i];

        if !token.is_verb_like() && (wh <= boundary || heads.contains(&Some(i))) {
            span = span.extend_to(i);
            heads.push(token.head);
        } else if token.surface == "of" {
            span = span.extend_to(i);
            heads.push(token.head);
        } else if question.flags().happened && token.surface == "happened" {
            span = span.extend_to(i);
            if tokens.surface_at(i + 1) == "to" {
                span = span.extend_to(i + 1);
            }
            break;
        } else {
            break;
        }
    }

    span
}
