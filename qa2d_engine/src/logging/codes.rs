//! Error and success codes with their classification metadata
//!
//! Every code the engine emits is declared here together with its category,
//! severity and recommended action.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Malformed parser output
pub mod tokens {
    use super::Code;

    pub const INVALID_TOKEN_ID: Code = Code::new("E010");
    pub const HEAD_OUT_OF_RANGE: Code = Code::new("E011");
    pub const MALFORMED_RECORD: Code = Code::new("E012");
}

/// Question analysis failures ("no conversion possible")
pub mod analysis {
    use super::Code;

    pub const MISSING_ROOT: Code = Code::new("E020");
    pub const MISSING_VERB: Code = Code::new("E021");
    pub const UNRESOLVED_WH: Code = Code::new("E022");
    pub const EMPTY_QUESTION: Code = Code::new("E023");
    pub const EMPTY_ANSWER: Code = Code::new("E024");
    pub const TOO_MANY_TOKENS: Code = Code::new("E025");
}

pub mod placement {
    use super::Code;

    pub const UNRESOLVED_POSITION: Code = Code::new("E030");
    pub const POSITION_OUT_OF_RANGE: Code = Code::new("E031");
}

pub mod morphology {
    use super::Code;

    pub const UNRECOGNIZED_VERB: Code = Code::new("E040");
    pub const LEXICON_LOAD_FAILURE: Code = Code::new("E041");
}

pub mod batch {
    use super::Code;

    pub const IO_ERROR: Code = Code::new("E050");
    pub const THREAD_FAILURE: Code = Code::new("E051");
    pub const BATCH_LIMIT_EXCEEDED: Code = Code::new("E052");
    pub const NO_INPUT_FOUND: Code = Code::new("E053");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

pub mod success {
    use super::Code;

    pub const OPERATION_COMPLETED_SUCCESSFULLY: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");

    pub const QUESTION_ANALYZED: Code = Code::new("I010");
    pub const QUESTION_CLASSIFIED: Code = Code::new("I020");
    pub const REPOSITIONING_APPLIED: Code = Code::new("I030");
    pub const SPLICE_COMPLETE: Code = Code::new("I040");
    pub const CONVERSION_COMPLETE: Code = Code::new("I050");
    pub const BATCH_COMPLETE: Code = Code::new("I060");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // System
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Internal engine error",
                "Report the input pair that triggered the failure",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Engine initialization failed",
                "Check the runtime configuration and environment variables",
            ),
            // Tokens
            ErrorMetadata::new(
                "E010",
                "Tokens",
                Severity::Medium,
                true,
                false,
                "Token ids are not a contiguous 1-based sequence",
                "Feed the parser output in CoNLL-U order without gaps",
            ),
            ErrorMetadata::new(
                "E011",
                "Tokens",
                Severity::Medium,
                true,
                false,
                "Token head points outside the sentence",
                "Check the dependency parse for the offending token",
            ),
            ErrorMetadata::new(
                "E012",
                "Tokens",
                Severity::Medium,
                true,
                false,
                "Input record could not be decoded",
                "Verify each line is a JSON object with id, question and answer",
            ),
            // Analysis
            ErrorMetadata::new(
                "E020",
                "Analysis",
                Severity::Low,
                true,
                false,
                "Question has no token with relation root",
                "The pair is skipped; no conversion is possible",
            ),
            ErrorMetadata::new(
                "E021",
                "Analysis",
                Severity::Low,
                true,
                false,
                "Question contains no verb-like token",
                "The pair is skipped; no conversion is possible",
            ),
            ErrorMetadata::new(
                "E022",
                "Analysis",
                Severity::Low,
                true,
                false,
                "No interrogative word could be resolved",
                "The pair is skipped; no conversion is possible",
            ),
            ErrorMetadata::new(
                "E023",
                "Analysis",
                Severity::Low,
                true,
                false,
                "Question has no tokens",
                "Supply a parsed question",
            ),
            ErrorMetadata::new(
                "E024",
                "Analysis",
                Severity::Low,
                true,
                false,
                "Answer has no tokens after punctuation removal",
                "Supply a non-empty answer phrase",
            ),
            ErrorMetadata::new(
                "E025",
                "Analysis",
                Severity::Medium,
                true,
                false,
                "Token sequence exceeds the configured limit",
                "Raise analysis limits in the build profile or shorten the input",
            ),
            // Placement
            ErrorMetadata::new(
                "E030",
                "Placement",
                Severity::Low,
                true,
                false,
                "Answer insertion position could not be resolved",
                "The pair is reported as not converted",
            ),
            ErrorMetadata::new(
                "E031",
                "Placement",
                Severity::Medium,
                true,
                false,
                "Explicit insertion position is out of range",
                "Use a position no greater than the question length",
            ),
            // Morphology
            ErrorMetadata::new(
                "E040",
                "Morphology",
                Severity::Medium,
                true,
                false,
                "Conjugator could not inflect the verb",
                "Add the verb to the irregular verb table",
            ),
            ErrorMetadata::new(
                "E041",
                "Morphology",
                Severity::High,
                false,
                false,
                "Lexicon resource could not be loaded",
                "Check the path and format of the lexicon file",
            ),
            // Batch
            ErrorMetadata::new(
                "E050",
                "Batch",
                Severity::High,
                true,
                false,
                "Batch input or output failed",
                "Check file permissions and paths",
            ),
            ErrorMetadata::new(
                "E051",
                "Batch",
                Severity::High,
                false,
                true,
                "Worker thread failed",
                "Re-run with fewer threads to isolate the failing chunk",
            ),
            ErrorMetadata::new(
                "E052",
                "Batch",
                Severity::Medium,
                true,
                false,
                "Batch exceeds the configured pair limit",
                "Split the input into smaller files",
            ),
            ErrorMetadata::new(
                "E053",
                "Batch",
                Severity::Medium,
                true,
                false,
                "No input files were found",
                "Point the batch at a .jsonl file or a directory containing them",
            ),
            // Success
            ErrorMetadata::new(
                "I001",
                "General",
                Severity::Low,
                true,
                false,
                "Operation completed successfully",
                "Continue",
            ),
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed",
                "Continue",
            ),
            ErrorMetadata::new(
                "I010",
                "Analysis",
                Severity::Low,
                true,
                false,
                "Question analyzed",
                "Continue to classification",
            ),
            ErrorMetadata::new(
                "I020",
                "Classification",
                Severity::Low,
                true,
                false,
                "Question classified",
                "Continue to repositioning",
            ),
            ErrorMetadata::new(
                "I030",
                "Transform",
                Severity::Low,
                true,
                false,
                "Auxiliary repositioning and agreement applied",
                "Continue to splicing",
            ),
            ErrorMetadata::new(
                "I040",
                "Splice",
                Severity::Low,
                true,
                false,
                "Answer spliced into question",
                "Continue to formatting",
            ),
            ErrorMetadata::new(
                "I050",
                "Pipeline",
                Severity::Low,
                true,
                false,
                "Declarative sentence produced",
                "Continue",
            ),
            ErrorMetadata::new(
                "I060",
                "Batch",
                Severity::Low,
                true,
                false,
                "Batch conversion completed",
                "Review the summary",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
