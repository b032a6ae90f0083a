use crate::classification::GapType;
use crate::config::{build_info, compile_time};

/// Information about pipeline capabilities
#[derive(Debug, Clone)]
pub struct PipelineInfo {
    pub pipeline_stages: usize,
    pub gap_types: Vec<&'static str>,
    pub max_question_tokens: usize,
    pub max_answer_tokens: usize,
    pub max_ancestor_hops: usize,
    pub common_prepositions: usize,
    pub config_source: String,
    pub global_logging_enabled: bool,
}

impl PipelineInfo {
    pub fn report(&self) -> String {
        format!(
            "QA2D Conversion Pipeline:\n\
             - Pipeline Stages: {}\n\
             - Gap Types: {}\n\
             - Max Question Tokens: {}\n\
             - Max Answer Tokens: {}\n\
             - Max Ancestor Hops: {}\n\
             - Common Prepositions: {}\n\
             - Configuration: {}\n\
             - Global Logging: {}",
            self.pipeline_stages,
            self.gap_types.join(", "),
            self.max_question_tokens,
            self.max_answer_tokens,
            self.max_ancestor_hops,
            self.common_prepositions,
            self.config_source,
            self.global_logging_enabled
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "{}-stage question-to-declarative converter with {} gap types",
            self.pipeline_stages,
            self.gap_types.len()
        )
    }
}

/// Get pipeline capabilities information
pub fn get_pipeline_info() -> PipelineInfo {
    PipelineInfo {
        pipeline_stages: super::STAGE_COUNT,
        gap_types: GapType::ALL.iter().map(|g| g.as_str()).collect(),
        max_question_tokens: compile_time::analysis::MAX_QUESTION_TOKENS,
        max_answer_tokens: compile_time::analysis::MAX_ANSWER_TOKENS,
        max_ancestor_hops: compile_time::analysis::MAX_ANCESTOR_HOPS,
        common_prepositions: crate::lexicon::common_prepositions().len(),
        config_source: build_info::source_info(),
        global_logging_enabled: crate::logging::is_initialized(),
    }
}
