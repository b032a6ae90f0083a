use crate::morphology::EnglishConjugator;
use crate::tokens::RawToken;

/// Validate that the bundled resources load and a known pair converts
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating conversion pipeline");

    let conjugator = EnglishConjugator::new()
        .map_err(|e| format!("Conjugator initialization failed: {}", e))?;

    let prepositions = crate::lexicon::common_prepositions();
    if prepositions.is_empty() {
        return Err("Bundled preposition list is empty".to_string());
    }

    let question = [
        RawToken::new(1, "What", "PRON", "WP", 4, "obj"),
        RawToken::new(2, "do", "AUX", "VBP", 4, "aux"),
        RawToken::new(3, "you", "PRON", "PRP", 4, "nsubj"),
        RawToken::new(4, "like", "VERB", "VB", 0, "root"),
        RawToken::new(5, "?", "PUNCT", ".", 4, "punct"),
    ];
    let answer = [RawToken::new(1, "pizza", "NOUN", "NN", 0, "root")];

    let result = super::convert_raw(&question, &answer, &conjugator)
        .map_err(|e| format!("Smoke conversion failed: {}", e))?;
    let sentence = result.sentence();
    if sentence != "You like pizza." {
        return Err(format!("Smoke conversion produced '{}'", sentence));
    }

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Conversion pipeline validation succeeded",
        "stages_validated" => super::STAGE_COUNT,
        "irregular_verbs" => conjugator.irregular_count(),
        "prepositions" => prepositions.len()
    );

    Ok(())
}
