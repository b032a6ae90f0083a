//! Auxiliary and copula repositioning
//!
//! Questions front the auxiliary ("*did* they go"); declaratives keep it next
//! to the verb. Repositioning produces a new word order over the question's
//! original indices; the tokens themselves are not rebuilt until splicing.

use crate::analysis::Question;
use crate::classification::{GapType, Placement, PlacementResult};
use crate::tokens::Side;
use crate::utils::TokenRange;

/// Question word order after repositioning, plus the possibly updated placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rearrangement {
    /// Original question indices in their new order
    pub order: Vec<usize>,
    pub placement: Placement,
    /// The block that moved and its target, when anything moved
    pub moved: Option<(TokenRange, usize)>,
}

impl Rearrangement {
    fn identity(len: usize, placement: Placement) -> Self {
        Self {
            order: (0..len).collect(),
            placement,
            moved: None,
        }
    }
}

/// Move the auxiliary chain or copula back into declarative position
pub fn reposition(question: &Question, placement: Placement) -> PlacementResult<Rearrangement> {
    let len = question.len();

    if placement.gap_type.moves_auxiliary() {
        return Ok(swap_auxiliary(question, placement, None));
    }

    if placement.gap_type == GapType::Subject && needs_copula_inversion(question) {
        // "What is the capital of France" -> "The capital of France is <answer>"
        let target = question.last_word() + 1;
        let rearranged = swap_auxiliary(question, placement, Some(target));
        let placement = rearranged.placement.with_position(target, len)?;
        return Ok(Rearrangement {
            placement,
            ..rearranged
        });
    }

    Ok(Rearrangement::identity(len, placement))
}

fn needs_copula_inversion(question: &Question) -> bool {
    let Some(cop) = question.copula() else {
        return false;
    };
    let before_preposition = question
        .tokens()
        .get(cop + 1)
        .map(|t| t.has_preposition_tag())
        .unwrap_or(false);

    question.wh_word() != "who" && !question.flags().auxiliary_precedes_verb && !before_preposition
}

fn swap_auxiliary(question: &Question, placement: Placement, forced: Option<usize>) -> Rearrangement {
    let len = question.len();

    let (block, target) = match (question.auxiliary_chain(), question.copula()) {
        (Some(chain), _) => (chain, forced.unwrap_or_else(|| auxiliary_target(question, chain))),
        (None, Some(cop)) => (
            TokenRange::single(cop),
            forced.unwrap_or_else(|| copula_target(question, cop, &placement)),
        ),
        (None, None) => return Rearrangement::identity(len, placement),
    };

    if target == block.start {
        return Rearrangement::identity(len, placement);
    }

    crate::log_debug!("Repositioning auxiliary block",
        "block" => block,
        "target" => target,
        "gap_type" => placement.gap_type
    );

    Rearrangement {
        order: relocate_block(len, block.start, block.len(), target),
        placement,
        moved: Some((block, target)),
    }
}

/// Start of the verb group (plus preceding adverbs) the auxiliary chain belongs in front of
pub fn auxiliary_target(question: &Question, chain: TokenRange) -> usize {
    let tokens = question.tokens();
    let root = question.root();

    if chain.start > root || chain.end == question.last_word() {
        return chain.start;
    }

    let mut verb_start = root;
    for i in (0..root).rev() {
        if tokens[i].is_verb_like() {
            verb_start = i;
        } else {
            break;
        }
    }

    let mut target = verb_start;
    for i in (0..verb_start).rev() {
        let token = &tokens[i];
        let modifies_verb = token.relation == "advmod"
            && (token.attaches_to(root) || token.attaches_to(verb_start));
        if token.is_adverb() || modifies_verb {
            target = i;
        } else {
            break;
        }
    }

    target
}

/// Copula goes before the predicate's modifiers for complements, else after the last word
pub fn copula_target(question: &Question, cop: usize, placement: &Placement) -> usize {
    let tokens = question.tokens();
    let last_word = question.last_word();

    if cop == last_word {
        return cop;
    }

    let mut predicate = question.root();
    let modifiers = tokens.children(predicate, &["case", "det", "amod", "advmod"], Side::Left);
    if let (Some(&first), Some(&last)) = (modifiers.first(), modifiers.last()) {
        if last + 1 == predicate {
            predicate = first;
        }
    }

    if predicate > placement.wh_span.end + 2
        && predicate > cop
        && placement.gap_type == GapType::Complement
    {
        predicate
    } else {
        last_word + 1
    }
}

/// Order of `0..len` after moving the block `[origin, origin + width)` to `target`.
///
/// A forward move places the block just before the token that was at
/// `target`; a backward move places it at `target`. Targets inside the block
/// leave the order unchanged.
pub fn relocate_block(len: usize, origin: usize, width: usize, target: usize) -> Vec<usize> {
    let block_end = (origin + width).min(len);
    let target = target.min(len);

    if target >= block_end {
        (0..origin)
            .chain(block_end..target)
            .chain(origin..block_end)
            .chain(target..len)
            .collect()
    } else if target < origin {
        (0..target)
            .chain(origin..block_end)
            .chain(target..origin)
            .chain(block_end..len)
            .collect()
    } else {
        (0..len).collect()
    }
}
