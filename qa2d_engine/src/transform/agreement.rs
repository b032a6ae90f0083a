//! Tense agreement after do-support is removed
//!
//! "Where *did* they *go*" loses its `did`, so the main verb has to carry the
//! tense: `did` requests the past, `does` the third person singular present.

use crate::analysis::{AnswerSpan, Question};
use crate::morphology::{ConjugationError, Conjugator, Inflection};
use crate::tokens::{Side, Token, TokenSequence};

/// Inflection implied by a do-support auxiliary; plain `do` implies none
pub fn requested_inflection(auxiliary: &str) -> Option<Inflection> {
    match auxiliary {
        "did" => Some(Inflection::Past),
        "does" => Some(Inflection::PresentThirdSingular),
        _ => None,
    }
}

/// Inflection the question's do-support asks for, if the clause keeps no `do`
pub fn question_inflection(question: &Question) -> Option<Inflection> {
    if !question.has_do_support() {
        return None;
    }
    let aux = question.auxiliary()?;
    requested_inflection(&question.tokens()[aux].surface)
}

/// Inflect one verb; the past of `leave` is fixed as `left`
pub fn inflect(
    verb: &Token,
    inflection: Inflection,
    conjugator: &dyn Conjugator,
) -> Result<Token, ConjugationError> {
    let surface = match inflection {
        Inflection::Past if verb.surface == "leave" => "left".to_string(),
        _ => conjugator.conjugate_tagged(&verb.surface, &verb.fine_pos, inflection)?,
    };
    Ok(verb.reinflected(&surface, inflection.fine_tag()))
}

/// The root and its coordinated verbs, or nothing when the root is not a verb
fn agreement_targets(tokens: &TokenSequence, root: usize) -> Vec<usize> {
    if !tokens[root].is_verb_like() {
        return Vec::new();
    }
    let mut targets = vec![root];
    targets.extend(
        tokens
            .children(root, &["conj"], Side::Anywhere)
            .into_iter()
            .filter(|&c| tokens[c].is_verb_like()),
    );
    targets
}

fn retense(
    tokens: &TokenSequence,
    root: usize,
    inflection: Inflection,
    conjugator: &dyn Conjugator,
) -> Result<TokenSequence, ConjugationError> {
    let mut result = tokens.clone();
    for target in agreement_targets(tokens, root) {
        let inflected = inflect(&tokens[target], inflection, conjugator)?;
        result = result.with_replaced(target, inflected);
    }
    Ok(result)
}

/// Question tokens (original order) with the main verb carrying the tense of removed do-support
pub fn inflect_question(
    question: &Question,
    conjugator: &dyn Conjugator,
) -> Result<TokenSequence, ConjugationError> {
    match question_inflection(question) {
        Some(inflection) => retense(question.tokens(), question.root(), inflection, conjugator),
        None => Ok(question.tokens().clone()),
    }
}

/// Answer with its root verb (and coordinated verbs) inflected
pub fn inflect_answer(
    answer: &AnswerSpan,
    inflection: Inflection,
    conjugator: &dyn Conjugator,
) -> Result<AnswerSpan, ConjugationError> {
    let Some(root) = answer.root() else {
        return Ok(answer.clone());
    };
    let mut result = answer.clone();
    for target in agreement_targets(answer.tokens(), root) {
        let inflected = inflect(&answer.tokens()[target], inflection, conjugator)?;
        result = result.with_replaced(target, inflected);
    }
    Ok(result)
}
