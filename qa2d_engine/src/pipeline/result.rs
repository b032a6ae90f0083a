use crate::classification::GapType;
use crate::splice::Declarative;
use crate::utils::TokenRange;
use std::time::Duration;

/// Outcome of one successful conversion
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub declarative: Declarative,
    pub wh_span: TokenRange,
    /// Insertion index after any override
    pub position: usize,
    pub question_tokens: usize,
    pub answer_tokens: usize,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        declarative: Declarative,
        wh_span: TokenRange,
        position: usize,
        question_tokens: usize,
        answer_tokens: usize,
        processing_duration: Duration,
    ) -> Self {
        Self {
            declarative,
            wh_span,
            position,
            question_tokens,
            answer_tokens,
            processing_duration,
        }
    }

    pub fn gap_type(&self) -> GapType {
        self.declarative.gap_type
    }

    pub fn words(&self) -> &[String] {
        &self.declarative.words
    }

    pub fn sentence(&self) -> String {
        self.declarative.sentence()
    }

    pub fn log_success(&self) {
        crate::log_success!(
            crate::logging::codes::success::CONVERSION_COMPLETE,
            "Question converted to declarative",
            span = self.wh_span,
            "gap_type" => self.gap_type(),
            "position" => self.position,
            "output_words" => self.declarative.words.len(),
            "duration_us" => format!("{:.1}", self.processing_duration.as_secs_f64() * 1_000_000.0)
        );
    }
}
