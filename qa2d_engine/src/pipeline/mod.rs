mod error;
mod info;
mod result;
mod validation;

// Re-export public types
pub use error::PipelineError;
pub use info::{get_pipeline_info, PipelineInfo};
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::analysis::{AnswerSpan, Question};
use crate::classification::{self, GapType};
use crate::config::runtime::AnalysisPreferences;
use crate::logging::codes;
use crate::morphology::Conjugator;
use crate::splice::{self, Declarative};
use crate::tokens::{RawToken, TokenSequence};
use crate::transform::{self, agreement};
use std::time::Instant;

/// Analysis, classification, repositioning/agreement, splicing
pub const STAGE_COUNT: usize = 4;

/// Convert one question/answer pair (analysis -> classification -> repositioning -> splicing)
pub fn convert(
    question: &TokenSequence,
    answer: &TokenSequence,
    conjugator: &dyn Conjugator,
) -> Result<PipelineResult, PipelineError> {
    convert_with_preferences(question, answer, conjugator, &AnalysisPreferences::default())
}

/// Convert parser records directly
pub fn convert_raw(
    question: &[RawToken],
    answer: &[RawToken],
    conjugator: &dyn Conjugator,
) -> Result<PipelineResult, PipelineError> {
    let question = TokenSequence::from_raw(question)?;
    let answer = TokenSequence::from_raw(answer)?;
    convert(&question, &answer, conjugator)
}

/// Convert one pair with custom analysis logging preferences
pub fn convert_with_preferences(
    question: &TokenSequence,
    answer: &TokenSequence,
    conjugator: &dyn Conjugator,
    preferences: &AnalysisPreferences,
) -> Result<PipelineResult, PipelineError> {
    run_stages(question, answer, conjugator, preferences).inspect_err(|error| {
        crate::log_error!(error.error_code(), "Conversion failed",
            "error" => error,
            "rejection" => error.is_rejection()
        );
    })
}

fn run_stages(
    question_tokens: &TokenSequence,
    answer_tokens: &TokenSequence,
    conjugator: &dyn Conjugator,
    preferences: &AnalysisPreferences,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();

    crate::log_debug!("Starting conversion",
        "question_tokens" => question_tokens.len(),
        "answer_tokens" => answer_tokens.len()
    );

    // Stage 1: Analysis
    let question = Question::analyze(question_tokens.clone())?;
    let answer = AnswerSpan::new(answer_tokens.clone())?;

    if preferences.log_derived_flags {
        let flags = question.flags();
        crate::log_info!("Derived question flags",
            "wh" => question.wh_word(),
            "quantity" => flags.quantity,
            "time_unit" => flags.time_unit,
            "happened" => flags.happened,
            "aux_precedes_verb" => flags.auxiliary_precedes_verb,
            "complement" => flags.complement,
            "do_negated" => flags.do_negated
        );
    }
    crate::log_success!(codes::success::QUESTION_ANALYZED, "Question analyzed",
        span = classification::wh_span(&question),
        "root" => question.root(),
        "last_word" => question.last_word()
    );

    // Stage 2: Classification
    let placement = classification::classify(&question, &answer)?;

    if preferences.log_placement_details {
        crate::log_success!(codes::success::QUESTION_CLASSIFIED, "Question classified",
            span = placement.wh_span,
            "gap_type" => placement.gap_type,
            "position" => placement.position
        );
    }

    // Stage 3: Repositioning and agreement
    let rearranged = transform::reposition(&question, placement)?;
    if let Some((block, target)) = rearranged.moved {
        crate::log_success!(codes::success::REPOSITIONING_APPLIED, "Auxiliary repositioned",
            span = block,
            "target" => target
        );
    }

    let question_inflected = agreement::inflect_question(&question, conjugator)?;

    // The answer verb takes over the tense of the `do` it replaces
    let answer_inflection = question
        .auxiliary()
        .and_then(|aux| agreement::requested_inflection(&question.tokens()[aux].surface));
    let answer = match answer_inflection {
        Some(inflection)
            if placement.gap_type == GapType::Verb && placement.position == question.root() =>
        {
            agreement::inflect_answer(&answer, inflection, conjugator)?
        }
        _ => answer,
    };

    // Stage 4: Splicing
    let answer = splice::affix_answer(&question, &rearranged.placement, &answer);
    let removed_auxiliary = if question.has_do_support() {
        question.auxiliary()
    } else {
        None
    };
    let spliced = splice::splice(
        &question_inflected,
        &rearranged.order,
        &rearranged.placement,
        &answer,
        removed_auxiliary,
    )?;
    crate::log_debug!("Answer spliced", "words" => spliced.len());

    let declarative = Declarative::new(spliced, placement.gap_type);
    let result = PipelineResult::new(
        declarative,
        placement.wh_span,
        rearranged.placement.position,
        question_tokens.len(),
        answer_tokens.len(),
        start_time.elapsed(),
    );

    result.log_success();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::EnglishConjugator;
    use crate::analysis::AnalysisError;
    use crate::tokens::test_support::{fixtures, sentence};
    use assert_matches::assert_matches;

    fn conjugator() -> EnglishConjugator {
        EnglishConjugator::new().unwrap()
    }

    fn run(question: TokenSequence, answer: TokenSequence) -> PipelineResult {
        convert(&question, &answer, &conjugator()).unwrap()
    }

    #[test]
    fn test_direct_object_scenario() {
        let result = run(
            fixtures::what_do_you_like(),
            fixtures::single_word("pizza", "NOUN", "NN"),
        );
        assert_eq!(result.gap_type(), GapType::DirectObject);
        assert_eq!(result.sentence(), "You like pizza.");
    }

    #[test]
    fn test_subject_scenario() {
        let result = run(
            fixtures::who_is_the_president(),
            sentence(&[
                ("Barack", "PROPN", "NNP", 2, "compound"),
                ("Obama", "PROPN", "NNP", 0, "root"),
            ]),
        );
        assert_eq!(result.gap_type(), GapType::Subject);
        assert_eq!(result.sentence(), "Barack Obama is the president.");
    }

    #[test]
    fn test_complement_scenario() {
        let result = run(
            fixtures::where_did_they_go(),
            sentence(&[
                ("the", "DET", "DT", 2, "det"),
                ("store", "NOUN", "NN", 0, "root"),
            ]),
        );
        assert_eq!(result.gap_type(), GapType::Complement);
        assert_eq!(result.sentence(), "They went in the store.");
    }

    #[test]
    fn test_what_happened_to_scenario() {
        let result = run(
            fixtures::what_happened_to_him(),
            sentence(&[
                ("he", "PRON", "PRP", 2, "nsubj"),
                ("lost", "VERB", "VBD", 0, "root"),
                ("his", "PRON", "PRP$", 4, "nmod:poss"),
                ("job", "NOUN", "NN", 2, "obj"),
            ]),
        );
        assert_eq!(result.gap_type(), GapType::WhatHappenedTo);
        assert_eq!(result.sentence(), "Him he lost his job.");
    }

    #[test]
    fn test_copula_inversion_scenario() {
        let result = run(
            fixtures::what_is_the_capital_of_france(),
            fixtures::single_word("Paris", "PROPN", "NNP"),
        );
        assert_eq!(result.gap_type(), GapType::Subject);
        assert_eq!(result.position, 6);
        assert_eq!(result.sentence(), "The capital of France is Paris.");
    }

    #[test]
    fn test_verb_scenario() {
        let result = run(
            fixtures::what_did_he_do(),
            sentence(&[
                ("ran", "VERB", "VBD", 0, "root"),
                ("away", "ADV", "RB", 1, "advmod"),
            ]),
        );
        assert_eq!(result.gap_type(), GapType::Verb);
        assert_eq!(result.sentence(), "He ran away.");
    }

    #[test]
    fn test_verb_answer_takes_present_tense() {
        // "What does she do ?" + "teach math"
        let question = sentence(&[
            ("What", "PRON", "WP", 4, "obj"),
            ("does", "AUX", "VBZ", 4, "aux"),
            ("she", "PRON", "PRP", 4, "nsubj"),
            ("do", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ]);
        let answer = sentence(&[
            ("teach", "VERB", "VB", 0, "root"),
            ("math", "NOUN", "NN", 1, "obj"),
        ]);
        assert_eq!(run(question, answer).sentence(), "She teaches math.");
    }

    #[test]
    fn test_stranded_preposition_scenario() {
        let result = run(
            fixtures::who_did_she_talk_to(),
            sentence(&[
                ("her", "PRON", "PRP$", 2, "nmod:poss"),
                ("mother", "NOUN", "NN", 0, "root"),
            ]),
        );
        assert_eq!(result.gap_type(), GapType::Complement);
        assert_eq!(result.sentence(), "She talked to her mother.");
    }

    #[test]
    fn test_quantity_scenario() {
        let result = run(
            fixtures::how_many_books(),
            sentence(&[
                ("three", "NUM", "CD", 2, "nummod"),
                ("books", "NOUN", "NNS", 0, "root"),
            ]),
        );
        assert_eq!(result.gap_type(), GapType::DirectObject);
        assert_eq!(result.sentence(), "You read three books.");
    }

    #[test]
    fn test_negated_do_is_kept() {
        let result = run(
            fixtures::why_did_he_not_leave(),
            sentence(&[
                ("he", "PRON", "PRP", 3, "nsubj"),
                ("was", "AUX", "VBD", 3, "cop"),
                ("tired", "ADJ", "JJ", 0, "root"),
            ]),
        );
        assert_eq!(result.gap_type(), GapType::Complement);
        assert_eq!(result.sentence(), "He did not leave because he was tired.");
    }

    #[test]
    fn test_what_happened_scenario() {
        let question = sentence(&[
            ("What", "PRON", "WP", 2, "nsubj"),
            ("happened", "VERB", "VBD", 0, "root"),
            ("yesterday", "NOUN", "NN", 2, "obl:tmod"),
            ("?", "PUNCT", ".", 2, "punct"),
        ]);
        let answer = sentence(&[
            ("It", "PRON", "PRP", 2, "nsubj"),
            ("rained", "VERB", "VBD", 0, "root"),
        ]);
        let result = run(question, answer);
        assert_eq!(result.gap_type(), GapType::WhatHappened);
        assert_eq!(result.sentence(), "Yesterday it rained.");
    }

    #[test]
    fn test_wh_in_situ_scenario() {
        let question = sentence(&[
            ("You", "PRON", "PRP", 2, "nsubj"),
            ("saw", "VERB", "VBD", 0, "root"),
            ("what", "PRON", "WP", 2, "obj"),
            ("?", "PUNCT", ".", 2, "punct"),
        ]);
        let answer = sentence(&[
            ("a", "DET", "DT", 2, "det"),
            ("ghost", "NOUN", "NN", 0, "root"),
        ]);
        let result = run(question, answer);
        assert_eq!(result.gap_type(), GapType::NoWhMovement);
        assert_eq!(result.sentence(), "You saw a ghost.");
    }

    #[test]
    fn test_time_unit_scenario() {
        let question = sentence(&[
            ("What", "DET", "WDT", 2, "det"),
            ("year", "NOUN", "NN", 5, "obl:tmod"),
            ("did", "AUX", "VBD", 5, "aux"),
            ("he", "PRON", "PRP", 5, "nsubj"),
            ("die", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 5, "punct"),
        ]);
        let result = run(question, fixtures::single_word("1990", "NUM", "CD"));
        assert_eq!(result.gap_type(), GapType::Complement);
        assert_eq!(result.sentence(), "He died in 1990.");
    }

    #[test]
    fn test_how_scenario() {
        let question = sentence(&[
            ("How", "ADV", "WRB", 4, "advmod"),
            ("did", "AUX", "VBD", 4, "aux"),
            ("he", "PRON", "PRP", 4, "nsubj"),
            ("go", "VERB", "VB", 0, "root"),
            ("?", "PUNCT", ".", 4, "punct"),
        ]);
        let result = run(question, fixtures::single_word("train", "NOUN", "NN"));
        assert_eq!(result.sentence(), "He went by train.");
    }

    #[test]
    fn test_verb_through_do_complement_scenario() {
        let question = sentence(&[
            ("What", "PRON", "WP", 6, "obj"),
            ("did", "AUX", "VBD", 4, "aux"),
            ("he", "PRON", "PRP", 4, "nsubj"),
            ("want", "VERB", "VB", 0, "root"),
            ("to", "PART", "TO", 6, "mark"),
            ("do", "VERB", "VB", 4, "xcomp"),
            ("?", "PUNCT", ".", 4, "punct"),
        ]);
        let answer = sentence(&[
            ("run", "VERB", "VB", 0, "root"),
            ("away", "ADV", "RB", 1, "advmod"),
        ]);
        let result = run(question, answer);
        assert_eq!(result.gap_type(), GapType::Verb);
        assert_eq!(result.sentence(), "He wanted to run away.");
    }

    #[test]
    fn test_invalid_question_is_rejected() {
        let question = sentence(&[
            ("You", "PRON", "PRP", 2, "nsubj"),
            ("left", "VERB", "VBD", 0, "root"),
            (".", "PUNCT", ".", 2, "punct"),
        ]);
        let error = convert(
            &question,
            &fixtures::single_word("yes", "INTJ", "UH"),
            &conjugator(),
        )
        .unwrap_err();
        assert!(error.is_rejection());
        assert_matches!(error, PipelineError::Analysis(AnalysisError::UnresolvedWh));
    }

    #[test]
    fn test_malformed_raw_input() {
        let question = vec![RawToken::new(1, "Who", "PRON", "WP", 9, "nsubj")];
        let answer = vec![RawToken::new(1, "me", "PRON", "PRP", 0, "root")];
        assert_matches!(
            convert_raw(&question, &answer, &conjugator()),
            Err(PipelineError::Token(_))
        );
    }

    #[test]
    fn test_validate_pipeline() {
        let _ = crate::logging::init_global_logging();
        let result = validate_pipeline();
        assert!(result.is_ok());
    }

    #[test]
    fn test_pipeline_error_creation() {
        let error = PipelineError::pipeline_error("Test error");
        match error {
            PipelineError::Pipeline { message } => {
                assert_eq!(message, "Test error");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_pipeline_info_lists_gap_types() {
        let info = get_pipeline_info();
        assert_eq!(info.gap_types.len(), 7);
        assert!(info.report().contains("DOBJ"));
        assert!(info.summary().starts_with("4-stage"));
    }
}
