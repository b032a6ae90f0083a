//! Question analysis
//!
//! [`Question::analyze`] runs three stages over an immutable token sequence:
//! locating landmarks (root, wh-word, last word, stranded preposition),
//! resolving grammatical roles, and deriving the flags the classifier needs.
//! Each stage returns a new record; an invalid question stops at the first
//! stage and nothing downstream is computed.

use super::error::{AnalysisError, AnalysisResult};
use crate::config::compile_time::analysis::MAX_QUESTION_TOKENS;
use crate::lexicon;
use crate::tokens::{Side, TokenSequence};
use crate::utils::TokenRange;
use serde::Serialize;

const SUBJECT_RELATIONS: &[&str] = &["nsubj", "nsubj:pass", "csubj"];
const AUXILIARY_RELATIONS: &[&str] = &["aux", "aux:pass"];
const STRANDED_RELATIONS: &[&str] = &["compound:prt", "obl", "case"];

/// Boolean facts about a question that drive classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuestionFlags {
    /// `how many` / `how much`
    pub quantity: bool,
    /// `what year`, `which century`, ...
    pub time_unit: bool,
    /// `what happened`
    pub happened: bool,
    /// Auxiliary (or copula) sits directly before the main verb, adverbs aside
    pub auxiliary_precedes_verb: bool,
    /// The wh-phrase stands for a complement rather than a subject or object
    pub complement: bool,
    /// Do-support with `not`
    pub do_negated: bool,
}

/// A valid, fully analysed WH-question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    tokens: TokenSequence,
    root: usize,
    subject: Option<usize>,
    auxiliary_chain: Option<TokenRange>,
    copula: Option<usize>,
    wh: usize,
    last_word: usize,
    dangling_preposition: Option<usize>,
    flags: QuestionFlags,
}

// ============================================================================
// STAGE RECORDS
// ============================================================================

/// Stage 1 output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Landmarks {
    root: usize,
    wh: usize,
    last_word: usize,
    dangling_preposition: Option<usize>,
}

/// Stage 2 output, after copula/modal reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Roles {
    root: usize,
    subject: Option<usize>,
    auxiliary_chain: Option<TokenRange>,
    copula: Option<usize>,
}

impl Question {
    /// Analyse a parsed question, rejecting it when no conversion is possible
    pub fn analyze(tokens: TokenSequence) -> AnalysisResult<Self> {
        check_validity(&tokens)?;

        let landmarks = locate_landmarks(&tokens)?;
        let roles = resolve_roles(&tokens, landmarks.root);
        let flags = derive_flags(&tokens, &landmarks, &roles);

        Ok(Self {
            tokens,
            root: roles.root,
            subject: roles.subject,
            auxiliary_chain: roles.auxiliary_chain,
            copula: roles.copula,
            wh: landmarks.wh,
            last_word: landmarks.last_word,
            dangling_preposition: landmarks.dangling_preposition,
            flags,
        })
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

    /// Main predicate (the copula token when a modal governs `be`)
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn subject(&self) -> Option<usize> {
        self.subject
    }

    /// First token of the auxiliary chain
    pub fn auxiliary(&self) -> Option<usize> {
        self.auxiliary_chain.map(|chain| chain.start)
    }

    pub fn auxiliary_chain(&self) -> Option<TokenRange> {
        self.auxiliary_chain
    }

    pub fn auxiliary_chain_len(&self) -> usize {
        self.auxiliary_chain.map(|chain| chain.len()).unwrap_or(0)
    }

    pub fn copula(&self) -> Option<usize> {
        self.copula
    }

    pub fn wh(&self) -> usize {
        self.wh
    }

    /// Lowercased interrogative word
    pub fn wh_word(&self) -> String {
        self.tokens[self.wh].lower()
    }

    pub fn last_word(&self) -> usize {
        self.last_word
    }

    pub fn dangling_preposition(&self) -> Option<usize> {
        self.dangling_preposition
    }

    pub fn flags(&self) -> QuestionFlags {
        self.flags
    }

    /// Auxiliary is `do`/`does`/`did` and the clause is not negated
    pub fn has_do_support(&self) -> bool {
        self.auxiliary()
            .map(|aux| lexicon::is_do_auxiliary(&self.tokens[aux].surface))
            .unwrap_or(false)
            && !self.flags.do_negated
    }
}

// ============================================================================
// VALIDITY
// ============================================================================

/// Reject questions that cannot be converted, in a fixed order
pub fn check_validity(tokens: &TokenSequence) -> AnalysisResult<()> {
    if tokens.is_empty() {
        return Err(AnalysisError::EmptyQuestion);
    }
    if tokens.len() > MAX_QUESTION_TOKENS {
        return Err(AnalysisError::too_many_tokens(
            "Question",
            tokens.len(),
            MAX_QUESTION_TOKENS,
        ));
    }
    if tokens.first_with_relation("root").is_none() {
        return Err(AnalysisError::MissingRoot);
    }
    if !tokens.iter().any(|t| t.is_verb_like()) {
        return Err(AnalysisError::MissingVerb);
    }
    if locate_wh(tokens).is_none() {
        return Err(AnalysisError::UnresolvedWh);
    }
    Ok(())
}

// ============================================================================
// STAGE 1: LANDMARKS
// ============================================================================

fn locate_landmarks(tokens: &TokenSequence) -> AnalysisResult<Landmarks> {
    let root = tokens
        .first_with_relation_prefix("root")
        .ok_or(AnalysisError::MissingRoot)?;
    let wh = locate_wh(tokens).ok_or(AnalysisError::UnresolvedWh)?;

    Ok(Landmarks {
        root,
        wh,
        last_word: last_word_index(tokens),
        dangling_preposition: dangling_preposition(tokens, root),
    })
}

/// The interrogative word, skipping candidates that introduce a relative clause
pub fn locate_wh(tokens: &TokenSequence) -> Option<usize> {
    let candidates: Vec<usize> = tokens
        .iter()
        .filter(|t| t.is_wh_candidate())
        .map(|t| t.position)
        .collect();

    match candidates.as_slice() {
        [] => None,
        [only] => Some(*only),
        many => many
            .iter()
            .copied()
            .find(|&wh| !introduces_clause(tokens, wh)),
    }
}

fn introduces_clause(tokens: &TokenSequence, wh: usize) -> bool {
    let next_is_clause_verb = tokens
        .get(wh + 1)
        .map(|next| next.is_verb_like() && next.relation.contains("cl"))
        .unwrap_or(false);
    let head_is_clause = tokens[wh]
        .head
        .map(|head| tokens[head].relation.contains("cl"))
        .unwrap_or(false);

    next_is_clause_verb || head_is_clause
}

/// Index of the last real word, 0 if there is none
pub fn last_word_index(tokens: &TokenSequence) -> usize {
    tokens
        .iter()
        .rev()
        .find(|t| t.is_word())
        .map(|t| t.position)
        .unwrap_or(0)
}

/// A preposition left behind by wh-movement ("Who did she talk *to*?")
pub fn dangling_preposition(tokens: &TokenSequence, root: usize) -> Option<usize> {
    for candidate in tokens.children(root, STRANDED_RELATIONS, Side::Right) {
        let token = &tokens[candidate];

        if token.relation == "case" {
            let stranded = tokens.iter().take(root).any(|t| t.attaches_to(candidate));
            if stranded {
                return Some(candidate);
            }
            continue;
        }

        if token.has_preposition_tag() {
            match tokens.get(candidate + 1) {
                None => return Some(candidate),
                Some(next) if next.head.map(|h| h > candidate).unwrap_or(false) => {
                    return Some(candidate)
                }
                Some(_) => {}
            }
        }
    }
    None
}

// ============================================================================
// STAGE 2: ROLES
// ============================================================================

fn resolve_roles(tokens: &TokenSequence, parsed_root: usize) -> Roles {
    let subject = tokens
        .children(parsed_root, SUBJECT_RELATIONS, Side::Anywhere)
        .first()
        .copied();
    let mut auxiliary = tokens
        .children(parsed_root, AUXILIARY_RELATIONS, Side::Anywhere)
        .first()
        .copied();
    let mut copula = tokens.first_with_relation_prefix("cop");
    let mut root = parsed_root;

    // "What could be the reason?": the modal governs bare `be`
    if let Some(cop) = copula.filter(|&c| tokens[c].surface == "be") {
        let modal = tokens
            .children(root, &["aux"], Side::Anywhere)
            .first()
            .copied()
            .filter(|&a| tokens[a].fine_pos == "MD");
        if let Some(modal) = modal {
            auxiliary = Some(modal);
            root = cop;
            copula = None;
        }
    }

    if let Some(cop) = copula {
        if auxiliary.is_none() && tokens[root].is_verb_like() {
            auxiliary = Some(cop);
            copula = None;
        }
    }

    let auxiliary_chain = auxiliary.map(|aux| {
        let extra = tokens
            .iter()
            .skip(aux + 1)
            .take_while(|t| t.is_auxiliary())
            .count();
        TokenRange::new(aux, aux + extra)
    });

    Roles {
        root,
        subject,
        auxiliary_chain,
        copula,
    }
}

// ============================================================================
// STAGE 3: DERIVED FLAGS
// ============================================================================

fn derive_flags(tokens: &TokenSequence, landmarks: &Landmarks, roles: &Roles) -> QuestionFlags {
    let wh = landmarks.wh;
    let wh_word = tokens[wh].lower();
    let next_surface = tokens.surface_at(wh + 1);

    let quantity = wh_word == "how" && lexicon::QUANTIFIERS.contains(&next_surface);
    let time_unit =
        (wh_word == "what" || wh_word == "which") && lexicon::TIME_UNITS.contains(&next_surface);
    let happened = wh_word == "what" && next_surface == "happened";
    let auxiliary_precedes_verb = auxiliary_precedes_verb(tokens, roles);

    let mut flags = QuestionFlags {
        quantity,
        time_unit,
        happened,
        auxiliary_precedes_verb,
        complement: false,
        do_negated: is_do_negated(tokens, roles),
    };
    flags.complement = is_complement(tokens, landmarks, roles, &flags);
    flags
}

/// Auxiliary chain (or copula) ends right before the root, ignoring `RB*` adverbs
fn auxiliary_precedes_verb(tokens: &TokenSequence, roles: &Roles) -> bool {
    let root = roles.root as isize;
    let adverbs = tokens.tokens()[..roles.root]
        .iter()
        .rev()
        .take_while(|t| t.is_adverb())
        .count() as isize;

    if let Some(cop) = roles.copula {
        if tokens[roles.root].is_verb_like() && cop as isize == root - 1 - adverbs {
            return true;
        }
    }

    match roles.auxiliary_chain {
        Some(chain) => chain.start as isize == root - adverbs - chain.len() as isize,
        None => false,
    }
}

fn is_complement(
    tokens: &TokenSequence,
    landmarks: &Landmarks,
    roles: &Roles,
    flags: &QuestionFlags,
) -> bool {
    let wh = landmarks.wh;
    let wh_word = tokens[wh].lower();
    let subject_wh = lexicon::is_subject_wh(&wh_word);

    let preposition_before_wh = wh
        .checked_sub(1)
        .map(|i| &tokens[i])
        .map(|t| t.has_preposition_tag() && !(flags.quantity && t.lower() == "about"))
        .unwrap_or(false);
    let ends_in_preposition = tokens[landmarks.last_word].has_preposition_tag();
    let has_auxiliary = roles.auxiliary_chain.is_some() || roles.copula.is_some();

    preposition_before_wh
        || ends_in_preposition
        || (!subject_wh && !flags.quantity)
        || (subject_wh
            && landmarks.dangling_preposition.is_some()
            && !flags.auxiliary_precedes_verb)
        || (flags.time_unit && has_auxiliary && !flags.auxiliary_precedes_verb)
}

/// "Why did he *not* leave?": do-support that must be kept
fn is_do_negated(tokens: &TokenSequence, roles: &Roles) -> bool {
    let Some(aux) = roles.auxiliary_chain.map(|chain| chain.start) else {
        return false;
    };
    if !lexicon::is_do_auxiliary(&tokens[aux].surface) {
        return false;
    }
    let Some(after) = tokens.get(aux + 1) else {
        return false;
    };

    after.surface == "not" || (roles.root > 0 && tokens[roles.root - 1].surface == "not")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::test_support::{fixtures, sentence};
    use assert_matches::assert_matches;

    #[test]
    fn test_do_support_question() {
        let q = Question::analyze(fixtures::what_do_you_like()).unwrap();
        assert_eq!(q.root(), 3);
        assert_eq!(q.wh(), 0);
        assert_eq!(q.subject(), Some(2));
        assert_eq!(q.auxiliary(), Some(1));
        assert_eq!(q.auxiliary_chain_len(), 1);
        assert_eq!(q.copula(), None);
        assert_eq!(q.last_word(), 3);
        assert_eq!(q.dangling_preposition(), None);

        let flags = q.flags();
        assert!(!flags.complement);
        assert!(!flags.auxiliary_precedes_verb);
        assert!(!flags.do_negated);
        assert!(q.has_do_support());
    }

    #[test]
    fn test_copula_question_keeps_copula() {
        let q = Question::analyze(fixtures::who_is_the_president()).unwrap();
        assert_eq!(q.root(), 3);
        assert_eq!(q.copula(), Some(1));
        assert_eq!(q.auxiliary(), None);
        assert_eq!(q.subject(), Some(0));
    }

    #[test]
    fn test_copula_becomes_auxiliary_for_verb_root() {
        // "What is he doing ?" parsed with `is` as copula of a verbal root
        let q = Question::analyze(sentence(&[
            ("What", "PRON", "WP", 4, "obj"),
            ("is", "AUX", "VBZ", 4, "cop"),
            ("he", "PRON", "PRP", 4, "nsubj"),
            ("doing", "VERB", "VBG", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ]))
        .unwrap();
        assert_eq!(q.copula(), None);
        assert_eq!(q.auxiliary(), Some(1));
    }

    #[test]
    fn test_modal_governing_be_moves_root_to_copula() {
        let q = Question::analyze(sentence(&[
            ("What", "PRON", "WP", 0, "root"),
            ("could", "AUX", "MD", 1, "aux"),
            ("be", "AUX", "VB", 1, "cop"),
            ("the", "DET", "DT", 5, "det"),
            ("reason", "NOUN", "NN", 1, "nsubj"),
            ("?", "PUNCT", ".", 1, "punct"),
        ]))
        .unwrap();
        assert_eq!(q.root(), 2);
        assert_eq!(q.auxiliary(), Some(1));
        assert_eq!(q.auxiliary_chain(), Some(TokenRange::new(1, 2)));
        assert_eq!(q.copula(), None);
    }

    #[test]
    fn test_complement_wh_words() {
        let q = Question::analyze(fixtures::where_did_they_go()).unwrap();
        assert!(q.flags().complement);
        assert_eq!(q.wh_word(), "where");
    }

    #[test]
    fn test_dangling_preposition_detected() {
        let tokens = fixtures::who_did_she_talk_to();
        assert_eq!(dangling_preposition(&tokens, 3), Some(4));
        // Detection does not depend on earlier calls
        assert_eq!(dangling_preposition(&tokens, 3), Some(4));

        let q = Question::analyze(tokens).unwrap();
        assert_eq!(q.dangling_preposition(), Some(4));
        assert_eq!(q.last_word(), 4);
        assert!(q.flags().complement);
    }

    #[test]
    fn test_quantity_and_time_flags() {
        let q = Question::analyze(fixtures::how_many_books()).unwrap();
        assert!(q.flags().quantity);
        assert!(!q.flags().complement);

        let q = Question::analyze(sentence(&[
            ("What", "DET", "WDT", 2, "det"),
            ("year", "NOUN", "NN", 5, "obl:tmod"),
            ("did", "AUX", "VBD", 5, "aux"),
            ("he", "PRON", "PRP", 5, "nsubj"),
            ("die", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 5, "punct"),
        ]))
        .unwrap();
        assert!(q.flags().time_unit);
        assert!(q.flags().complement);
    }

    #[test]
    fn test_happened_idiom() {
        let q = Question::analyze(fixtures::what_happened_to_him()).unwrap();
        assert!(q.flags().happened);
        assert_eq!(q.dangling_preposition(), None);
    }

    #[test]
    fn test_do_negation() {
        let q = Question::analyze(fixtures::why_did_he_not_leave()).unwrap();
        assert!(q.flags().do_negated);
        assert!(!q.has_do_support());
    }

    #[test]
    fn test_auxiliary_precedes_verb_skips_adverbs() {
        // "Who has already left ?"
        let q = Question::analyze(sentence(&[
            ("Who", "PRON", "WP", 4, "nsubj"),
            ("has", "AUX", "VBZ", 4, "aux"),
            ("already", "ADV", "RB", 4, "advmod"),
            ("left", "VERB", "VBN", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ]))
        .unwrap();
        assert!(q.flags().auxiliary_precedes_verb);
    }

    #[test]
    fn test_relative_clause_wh_is_skipped() {
        // "Who wrote the book which won ?"
        let tokens = sentence(&[
            ("Who", "PRON", "WP", 2, "nsubj"),
            ("wrote", "VERB", "VBD", 0, "root"),
            ("the", "DET", "DT", 4, "det"),
            ("book", "NOUN", "NN", 2, "obj"),
            ("which", "PRON", "WDT", 6, "nsubj"),
            ("won", "VERB", "VBD", 4, "acl:relcl"),
            ("?", "PUNCT", ".", 2, "punct"),
        ]);
        assert_eq!(locate_wh(&tokens), Some(0));

        // A relative pronoun ahead of the real interrogative is skipped
        let reversed = sentence(&[
            ("which", "PRON", "WDT", 2, "nsubj"),
            ("won", "VERB", "VBD", 4, "acl:relcl"),
            ("Who", "PRON", "WP", 4, "nsubj"),
            ("wrote", "VERB", "VBD", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ]);
        assert_eq!(locate_wh(&reversed), Some(2));
    }

    #[test]
    fn test_last_word_skips_punctuation_and_symbols() {
        let tokens = sentence(&[
            ("Who", "PRON", "WP", 2, "nsubj"),
            ("paid", "VERB", "VBD", 0, "root"),
            ("$", "SYM", "SYM", 2, "obj"),
            ("?", "PUNCT", ".", 2, "punct"),
        ]);
        assert_eq!(last_word_index(&tokens), 1);
        assert_eq!(last_word_index(&sentence(&[("?", "PUNCT", ".", 0, "root")])), 0);
    }

    #[test]
    fn test_validity_errors_in_order() {
        assert_matches!(
            Question::analyze(TokenSequence::default()),
            Err(AnalysisError::EmptyQuestion)
        );
        assert_matches!(
            Question::analyze(sentence(&[
                ("Who", "PRON", "WP", 2, "nsubj"),
                ("left", "VERB", "VBD", 1, "dep"),
            ])),
            Err(AnalysisError::MissingRoot)
        );
        assert_matches!(
            Question::analyze(sentence(&[
                ("Who", "PRON", "WP", 2, "nsubj"),
                ("there", "ADV", "RB", 0, "root"),
            ])),
            Err(AnalysisError::MissingVerb)
        );
        assert_matches!(
            Question::analyze(sentence(&[
                ("You", "PRON", "PRP", 2, "nsubj"),
                ("left", "VERB", "VBD", 0, "root"),
            ])),
            Err(AnalysisError::UnresolvedWh)
        );
    }

    #[test]
    fn test_rejects_overlong_question() {
        let mut rows = vec![("Who", "PRON", "WP", 2, "nsubj"), ("won", "VERB", "VBD", 0, "root")];
        rows.extend(std::iter::repeat(("very", "ADV", "RB", 2, "advmod")).take(MAX_QUESTION_TOKENS));
        assert_matches!(
            Question::analyze(sentence(&rows)),
            Err(AnalysisError::TooManyTokens { .. })
        );
    }
}
