//! Gap classification and answer insertion position

use super::error::{PlacementError, PlacementResult};
use super::gap::GapType;
use super::wh_span::wh_span;
use crate::analysis::{AnswerSpan, Question};
use crate::config::compile_time::analysis::MAX_ANCESTOR_HOPS;
use crate::lexicon;
use crate::tokens::Side;
use crate::utils::TokenRange;
use serde::Serialize;

/// Where and how the answer enters the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub gap_type: GapType,
    pub wh_span: TokenRange,
    /// Insertion index, in the coordinates of the question before splicing
    pub position: usize,
    /// Non-verbal answers to "what happened to X" get a leading `experienced`
    pub prepend_experienced: bool,
}

impl Placement {
    /// Same placement with an explicit insertion index; `position <= len` is required
    pub fn with_position(self, position: usize, question_len: usize) -> PlacementResult<Self> {
        if position > question_len {
            return Err(PlacementError::out_of_range(position, question_len));
        }
        Ok(Self { position, ..self })
    }
}

/// Classify the question's gap and compute the insertion position.
///
/// Rules are tried in priority order and the first match wins.
pub fn classify(question: &Question, answer: &AnswerSpan) -> PlacementResult<Placement> {
    let tokens = question.tokens();
    let flags = question.flags();
    let span = wh_span(question);
    let wh = question.wh();
    let root = question.root();

    let placement = |gap_type, position| Placement {
        gap_type,
        wh_span: span,
        position,
        prepend_experienced: false,
    };

    if flags.happened && tokens.surface_at(span.end) == "to" {
        let head = tokens[span.end].head.ok_or_else(|| {
            PlacementError::unresolved(
                GapType::WhatHappenedTo.as_str(),
                "`to` is not attached to anything",
            )
        })?;
        return Ok(Placement {
            prepend_experienced: !answer.is_verbal(),
            ..placement(GapType::WhatHappenedTo, head + 1)
        });
    }

    if flags.happened {
        return Ok(placement(GapType::WhatHappened, question.last_word() + 1));
    }

    let after_copula = question.copula().map(|cop| wh > cop).unwrap_or(false);
    if wh > root || after_copula {
        return Ok(placement(GapType::NoWhMovement, span.start));
    }

    if flags.complement {
        let position = match question.dangling_preposition() {
            Some(prep) => prep + 1,
            None => question.last_word() + 1,
        };
        return Ok(placement(GapType::Complement, position));
    }

    if is_subject_gap(question) {
        return Ok(placement(GapType::Subject, span.start));
    }

    let complements = tokens.children(root, &["xcomp"], Side::Right);
    let do_complement = complements
        .first()
        .copied()
        .filter(|&c| lexicon::is_do_form(&tokens[c].surface));
    let do_root = lexicon::is_do_form(&tokens[root].surface);

    if (answer.is_verbal() || answer.copula().is_some()) && (do_root || do_complement.is_some()) {
        return Ok(placement(GapType::Verb, do_complement.unwrap_or(root)));
    }

    Ok(placement(GapType::DirectObject, direct_object_gap(question)))
}

fn is_subject_gap(question: &Question) -> bool {
    let tokens = question.tokens();
    let wh = question.wh();
    let root = question.root();

    if question.copula().is_some() && wh == root {
        return true;
    }
    let Some(aux) = question.auxiliary() else {
        return true;
    };

    let inside_subject = question
        .subject()
        .map(|subject| tokens.is_descendant(wh, subject, MAX_ANCESTOR_HOPS))
        .unwrap_or(false);
    let aux_far_from_root =
        (aux as isize) < root as isize - question.auxiliary_chain_len() as isize;

    (inside_subject && !aux_far_from_root) || question.flags().auxiliary_precedes_verb
}

/// Index just past the verb group, where a direct object would sit
pub fn direct_object_gap(question: &Question) -> usize {
    let tokens = question.tokens();
    let root = question.root();
    let last_word = question.last_word();

    let mut gap = root + 1;
    if gap == last_word {
        return gap;
    }

    for complement in tokens.children(root, &["xcomp", "compound:prt"], Side::Right) {
        let token = &tokens[complement];
        if token.relation == "xcomp" && !token.is_verb_like() {
            continue;
        }
        gap = gap.max(complement + 1);
    }

    if let Some(next) = tokens.get(gap) {
        if next.has_preposition_tag() && next.head.map(|h| h < gap).unwrap_or(true) {
            gap += 1;
        }
    }

    gap.min(last_word + 1)
}
