//! Answer insertion and sentence finalisation
//!
//! Splicing works on slots that name a token by its source (question or
//! answer) and its index there. Insertion indices refer to the question after
//! repositioning but before the wh-phrase is removed, so the slot list is cut
//! with those indices first and turned into tokens only at the end.

use crate::analysis::AnswerSpan;
use crate::classification::{GapType, Placement, PlacementError, PlacementResult};
use crate::tokens::TokenSequence;
use serde::Serialize;

const ATTACHED_PUNCTUATION: &[&str] = &[".", ",", "!", "?", ";", ":"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Question(usize),
    Answer(usize),
}

/// The converted sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declarative {
    pub words: Vec<String>,
    pub gap_type: GapType,
    #[serde(skip)]
    pub tokens: TokenSequence,
}

impl Declarative {
    pub fn new(tokens: TokenSequence, gap_type: GapType) -> Self {
        Self {
            words: finalize(&tokens),
            gap_type,
            tokens,
        }
    }

    /// Words joined by spaces, punctuation and clitics attached to the previous word
    pub fn sentence(&self) -> String {
        let mut sentence = String::new();
        for word in &self.words {
            let attached = ATTACHED_PUNCTUATION.contains(&word.as_str()) || word.starts_with('\'');
            if !sentence.is_empty() && !attached {
                sentence.push(' ');
            }
            sentence.push_str(word);
        }
        sentence
    }
}

/// Clamped sub-slice, empty when `from` is past `to`
fn cut(slots: &[Slot], from: usize, to: usize) -> &[Slot] {
    let to = to.min(slots.len());
    let from = from.min(to);
    &slots[from..to]
}

/// Replace the wh-phrase with the answer.
///
/// `question_tokens` are in original order, `order` is the word order after
/// repositioning, and `removed_auxiliary` names a do-support token to drop.
pub fn splice(
    question_tokens: &TokenSequence,
    order: &[usize],
    placement: &Placement,
    answer: &AnswerSpan,
    removed_auxiliary: Option<usize>,
) -> PlacementResult<TokenSequence> {
    let mut slots: Vec<Slot> = order.iter().map(|&i| Slot::Question(i)).collect();
    let position = placement.position;
    let span = placement.wh_span;

    // The answer replaces the `do` verb
    if placement.gap_type == GapType::Verb {
        if position >= slots.len() {
            return Err(PlacementError::out_of_range(position, slots.len()));
        }
        slots.remove(position);
    }

    let answer_slots: Vec<Slot> = (0..answer.len()).map(Slot::Answer).collect();
    let len = slots.len();
    let mut spliced = Vec::with_capacity(len + answer_slots.len());

    if span.start == position {
        spliced.extend_from_slice(cut(&slots, 0, span.start));
        spliced.extend_from_slice(&answer_slots);
        spliced.extend_from_slice(cut(&slots, span.end + 1, len));
    } else if span.start < position {
        spliced.extend_from_slice(cut(&slots, 0, span.start));
        spliced.extend_from_slice(cut(&slots, span.end + 1, position));
        spliced.extend_from_slice(&answer_slots);
        spliced.extend_from_slice(cut(&slots, position, len));
    } else {
        spliced.extend_from_slice(&answer_slots);
        spliced.extend_from_slice(cut(&slots, 0, span.start));
        spliced.extend_from_slice(cut(&slots, span.end + 1, len));
    }

    if let Some(aux) = removed_auxiliary {
        if let Some(index) = spliced.iter().position(|&s| s == Slot::Question(aux)) {
            spliced.remove(index);
        }
    }

    let picks: Vec<(usize, usize)> = spliced
        .iter()
        .map(|slot| match *slot {
            Slot::Question(i) => (0, i),
            Slot::Answer(i) => (1, i),
        })
        .collect();

    Ok(TokenSequence::assemble(
        &[question_tokens, answer.tokens()],
        &picks,
    ))
}

/// Surface words with the last `?` turned into `.` and the first word capitalised
pub fn finalize(tokens: &TokenSequence) -> Vec<String> {
    let mut words = tokens.words();
    if let Some(mark) = words.iter().rposition(|w| w == "?") {
        words[mark] = ".".to_string();
    }
    if let Some(first) = words.first_mut() {
        *first = uppercase_first(first);
    }
    words
}

fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Question;
    use crate::classification::classify;
    use crate::tokens::test_support::{fixtures, sentence};
    use crate::transform::reposition;
    use crate::utils::TokenRange;
    use assert_matches::assert_matches;

    fn placement(gap_type: GapType, span: TokenRange, position: usize) -> Placement {
        Placement {
            gap_type,
            wh_span: span,
            position,
            prepend_experienced: false,
        }
    }

    fn noun(form: &str) -> AnswerSpan {
        AnswerSpan::new(fixtures::single_word(form, "NOUN", "NN")).unwrap()
    }

    #[test]
    fn test_splice_after_span_removes_do_support() {
        let question = Question::analyze(fixtures::what_do_you_like()).unwrap();
        let answer = noun("pizza");
        let placement = classify(&question, &answer).unwrap();
        let rearranged = reposition(&question, placement).unwrap();

        let spliced = splice(
            question.tokens(),
            &rearranged.order,
            &rearranged.placement,
            &answer,
            question.auxiliary(),
        )
        .unwrap();
        assert_eq!(spliced.words(), vec!["you", "like", "pizza", "?"]);
        assert_eq!(finalize(&spliced), vec!["You", "like", "pizza", "."]);
    }

    #[test]
    fn test_splice_in_place_of_span() {
        let question = fixtures::who_is_the_president();
        let answer = AnswerSpan::new(sentence(&[
            ("Barack", "PROPN", "NNP", 2, "compound"),
            ("Obama", "PROPN", "NNP", 0, "root"),
        ]))
        .unwrap();
        let spliced = splice(
            &question,
            &[0, 1, 2, 3, 4],
            &placement(GapType::Subject, TokenRange::single(0), 0),
            &answer,
            None,
        )
        .unwrap();
        assert_eq!(spliced.words(), vec!["Barack", "Obama", "is", "the", "president", "?"]);
        assert_eq!(spliced[1].head, None);
        assert_eq!(spliced[0].head, Some(1));
        assert_eq!(spliced[2].head, Some(4));
    }

    #[test]
    fn test_splice_before_span_prepends_answer() {
        let question = fixtures::who_is_the_president();
        let spliced = splice(
            &question,
            &[0, 1, 2, 3, 4],
            &placement(GapType::NoWhMovement, TokenRange::new(2, 3), 1),
            &noun("nobody"),
            None,
        )
        .unwrap();
        assert_eq!(spliced.words(), vec!["nobody", "Who", "is", "?"]);
    }

    #[test]
    fn test_verb_gap_replaces_do() {
        let question = fixtures::what_did_he_do();
        let answer = AnswerSpan::new(sentence(&[
            ("ran", "VERB", "VBD", 0, "root"),
            ("away", "ADV", "RB", 1, "advmod"),
        ]))
        .unwrap();
        let spliced = splice(
            &question,
            &[0, 2, 1, 3, 4],
            &placement(GapType::Verb, TokenRange::single(0), 3),
            &answer,
            Some(1),
        )
        .unwrap();
        assert_eq!(spliced.words(), vec!["he", "ran", "away", "?"]);
    }

    #[test]
    fn test_verb_gap_out_of_range() {
        let question = fixtures::what_did_he_do();
        assert_matches!(
            splice(
                &question,
                &[0, 1, 2, 3, 4],
                &placement(GapType::Verb, TokenRange::single(0), 5),
                &noun("nothing"),
                None,
            ),
            Err(PlacementError::OutOfRange { position: 5, len: 5 })
        );
    }

    #[test]
    fn test_reinserting_span_restores_question() {
        let question = fixtures::what_is_the_capital_of_france();
        let span_tokens = question.rearrange(&[0]);
        let answer = AnswerSpan::new(span_tokens).unwrap();
        let spliced = splice(
            &question,
            &(0..question.len()).collect::<Vec<_>>(),
            &placement(GapType::Subject, TokenRange::single(0), 0),
            &answer,
            None,
        )
        .unwrap();
        let restored: Vec<String> = spliced.words().iter().map(|w| w.to_lowercase()).collect();
        let original: Vec<String> = question.words().iter().map(|w| w.to_lowercase()).collect();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_heads_stay_in_range() {
        let cases = [
            (fixtures::what_do_you_like(), noun("pizza")),
            (fixtures::where_did_they_go(), noun("home")),
            (fixtures::what_is_the_capital_of_france(), noun("Paris")),
            (fixtures::who_did_she_talk_to(), noun("mother")),
            (fixtures::how_many_books(), noun("three")),
        ];
        for (tokens, answer) in cases {
            let question = Question::analyze(tokens).unwrap();
            let placement = classify(&question, &answer).unwrap();
            let rearranged = reposition(&question, placement).unwrap();
            let spliced = splice(
                question.tokens(),
                &rearranged.order,
                &rearranged.placement,
                &answer,
                question.auxiliary(),
            )
            .unwrap();
            for token in spliced.iter() {
                assert!(token.head.map(|h| h < spliced.len()).unwrap_or(true));
            }
        }
    }

    #[test]
    fn test_finalize_and_sentence() {
        let tokens = sentence(&[
            ("the", "DET", "DT", 2, "det"),
            ("answer", "NOUN", "NN", 0, "root"),
            ("is", "AUX", "VBZ", 2, "cop"),
            ("Tom", "PROPN", "NNP", 2, "nsubj"),
            ("'s", "PART", "POS", 4, "case"),
            ("?", "PUNCT", ".", 2, "punct"),
        ]);
        let declarative = Declarative::new(tokens, GapType::Subject);
        assert_eq!(declarative.words, vec!["The", "answer", "is", "Tom", "'s", "."]);
        assert_eq!(declarative.sentence(), "The answer is Tom's.");
    }

    #[test]
    fn test_only_last_question_mark_replaced() {
        let tokens = sentence(&[
            ("what", "PRON", "WP", 0, "root"),
            ("?", "PUNCT", ".", 1, "punct"),
            ("?", "PUNCT", ".", 1, "punct"),
        ]);
        assert_eq!(finalize(&tokens), vec!["What", "?", "."]);
        assert!(finalize(&TokenSequence::default()).is_empty());
    }
}
