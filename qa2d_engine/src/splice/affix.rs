//! Words added around the answer before it is spliced in
//!
//! Every step works on a fresh copy of the answer span, so the caller's span
//! is never changed.

use crate::analysis::{AnswerSpan, Question};
use crate::classification::{GapType, Placement};
use crate::lexicon;
use crate::tokens::Token;

/// Apply `experienced`, the possessive marker and any introducing preposition
pub fn affix_answer(question: &Question, placement: &Placement, answer: &AnswerSpan) -> AnswerSpan {
    let tokens = question.tokens();
    let wh_word = question.wh_word();

    let mut affixed = if placement.prepend_experienced {
        answer.with_prefix(&[Token::affix("experienced", "VBN")])
    } else {
        answer.clone()
    };

    if wh_word == "whose" {
        affixed = affixed.with_suffix(&[Token::affix("'s", "POS")]);
    }

    let span_start = &tokens[placement.wh_span.start];
    let answer_starts_with_preposition = affixed.first().has_preposition_tag();

    if span_start.has_preposition_tag() && !answer_starts_with_preposition {
        // "To whom ..." -> "to <answer>"
        return affixed.with_prefix(&[Token::affix(&span_start.lower(), &span_start.fine_pos)]);
    }

    let needs_preposition = placement.gap_type == GapType::Complement
        && !answer_starts_with_preposition
        && !tokens[question.last_word()].has_preposition_tag()
        && question.dangling_preposition().is_none();
    if !needs_preposition {
        return affixed;
    }

    let multi_word_how = wh_word == "how" && placement.wh_span.len() > 1;
    match lexicon::wh_preposition(&wh_word).filter(|_| !multi_word_how) {
        Some("because") if affixed.is_nominal() => affixed.with_prefix(&[
            Token::affix("because", "IN"),
            Token::affix("of", "IN"),
        ]),
        Some(preposition) => affixed.with_prefix(&[Token::affix(preposition, "IN")]),
        None if question.flags().time_unit => affixed.with_prefix(&[Token::affix("in", "IN")]),
        None => affixed,
    }
}
