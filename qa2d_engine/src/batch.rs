//! JSON-lines batch conversion
//!
//! Each input line holds one pair: `{"id", "question": [RawToken], "answer": [RawToken]}`.
//! Pairs are converted across worker threads in chunks; every pair yields one
//! output line whether it converted or not. A pair that fails never stops the
//! batch unless `fail_fast` is set.

use crate::classification::GapType;
use crate::config::compile_time::batch::{MAX_CHUNK_SIZE, MAX_PAIRS_PER_BATCH, MAX_WORKER_THREADS};
use crate::config::runtime::BatchPreferences;
use crate::logging::{self, codes};
use crate::morphology::Conjugator;
use crate::pipeline::{self, PipelineError, PipelineResult};
use crate::tokens::RawToken;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

// ============================================================================
// BATCH PROCESSING TYPES
// ============================================================================

/// Batch processing configuration
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub max_threads: usize,
    pub progress_reporting: bool,
    pub fail_fast: bool,
}

impl BatchConfig {
    /// Override the worker count, clamped to `1..=MAX_WORKER_THREADS`
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_progress(mut self, progress_reporting: bool) -> Self {
        self.progress_reporting = progress_reporting;
        self
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        let preferences = BatchPreferences::default();
        Self {
            max_threads: thread::available_parallelism()
                .map(|n| n.get().min(MAX_WORKER_THREADS))
                .unwrap_or(4),
            progress_reporting: preferences.progress_reporting,
            fail_fast: preferences.fail_fast,
        }
    }
}

/// One input line
#[derive(Debug, Clone, Deserialize)]
pub struct PairRecord {
    #[serde(default)]
    pub id: String,
    pub question: Vec<RawToken>,
    pub answer: Vec<RawToken>,
}

/// A line of batch input, parsed or not
#[derive(Debug, Clone)]
pub enum BatchItem {
    Pair { line: usize, record: PairRecord },
    Malformed { line: usize, id: String, error: String },
}

impl BatchItem {
    pub fn line(&self) -> usize {
        match self {
            Self::Pair { line, .. } | Self::Malformed { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairStatus {
    Converted,
    Rejected,
}

/// One output line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairOutcome {
    #[serde(skip)]
    pub line: usize,
    pub id: String,
    pub status: PairStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_type: Option<GapType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PairOutcome {
    fn converted(line: usize, id: &str, result: &PipelineResult) -> Self {
        Self {
            line,
            id: id.to_string(),
            status: PairStatus::Converted,
            words: Some(result.words().to_vec()),
            sentence: Some(result.sentence()),
            gap_type: Some(result.gap_type()),
            error: None,
        }
    }

    fn rejected(line: usize, id: &str, error: String) -> Self {
        Self {
            line,
            id: id.to_string(),
            status: PairStatus::Rejected,
            words: None,
            sentence: None,
            gap_type: None,
            error: Some(error),
        }
    }

    pub fn is_converted(&self) -> bool {
        self.status == PairStatus::Converted
    }
}

/// Batch processing results, ordered by input line
#[derive(Debug)]
pub struct BatchResults {
    pub outcomes: Vec<PairOutcome>,
    pub processing_duration: Duration,
    pub pairs_processed: usize,
    pub pairs_discovered: usize,
}

impl BatchResults {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            processing_duration: Duration::new(0, 0),
            pairs_processed: 0,
            pairs_discovered: 0,
        }
    }

    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.converted_count()
    }

    pub fn success_rate(&self) -> f64 {
        if self.pairs_processed == 0 {
            0.0
        } else {
            self.converted_count() as f64 / self.pairs_processed as f64
        }
    }

    pub fn add(&mut self, outcome: PairOutcome) {
        self.outcomes.push(outcome);
        self.pairs_processed += 1;
    }

    pub fn merge(&mut self, other: BatchResults) {
        self.outcomes.extend(other.outcomes);
        self.pairs_processed += other.pairs_processed;
    }

    /// Write one JSON line per outcome
    pub fn write_jsonl<W: Write>(&self, writer: &mut W) -> Result<(), BatchError> {
        for outcome in &self.outcomes {
            let line = serde_json::to_string(outcome).map_err(|e| BatchError::io("<output>", e))?;
            writeln!(writer, "{}", line).map_err(|e| BatchError::io("<output>", e))?;
        }
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "Batch conversion completed: {} pairs processed, {} converted ({:.1}%), {} rejected, {:.2}s total",
            self.pairs_processed,
            self.converted_count(),
            self.success_rate() * 100.0,
            self.rejected_count(),
            self.processing_duration.as_secs_f64()
        )
    }
}

impl Default for BatchResults {
    fn default() -> Self {
        Self::new()
    }
}

/// Batch processing errors
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Worker thread failed: {message}")]
    ThreadFailure { message: String },

    #[error("Too many pairs: {count} (max: {max})")]
    LimitExceeded { count: usize, max: usize },

    #[error("No question/answer pairs found in {path}")]
    NoInput { path: String },
}

impl BatchError {
    pub fn io(path: impl AsRef<str>, error: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.as_ref().to_string(),
            message: error.to_string(),
        }
    }

    fn thread_failure(message: &str) -> Self {
        Self::ThreadFailure {
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::Io { .. } => codes::batch::IO_ERROR,
            Self::ThreadFailure { .. } => codes::batch::THREAD_FAILURE,
            Self::LimitExceeded { .. } => codes::batch::BATCH_LIMIT_EXCEEDED,
            Self::NoInput { .. } => codes::batch::NO_INPUT_FOUND,
        }
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Parse JSON-lines content; blank lines are skipped, bad lines become `Malformed`
pub fn parse_pairs(content: &str) -> Vec<BatchItem> {
    content
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| {
            let line = index + 1;
            match serde_json::from_str::<PairRecord>(text) {
                Ok(mut record) => {
                    if record.id.is_empty() {
                        record.id = format!("line-{}", line);
                    }
                    BatchItem::Pair { line, record }
                }
                Err(e) => BatchItem::Malformed {
                    line,
                    id: format!("line-{}", line),
                    error: format!("Malformed pair record: {}", e),
                },
            }
        })
        .collect()
}

/// Read and parse a `.jsonl` file
pub fn read_pairs(path: &Path) -> Result<Vec<BatchItem>, BatchError> {
    let content = fs::read_to_string(path).map_err(|e| BatchError::io(path.display().to_string(), e))?;
    let items = parse_pairs(&content);

    let malformed = items
        .iter()
        .filter(|item| matches!(item, BatchItem::Malformed { .. }))
        .count();
    if malformed > 0 {
        crate::log_warning!("Some input lines could not be parsed",
            "file" => path.display(),
            "malformed" => malformed,
            "total" => items.len()
        );
    }

    Ok(items)
}

// ============================================================================
// BATCH PROCESSING
// ============================================================================

fn convert_item(item: &BatchItem, conjugator: &dyn Conjugator) -> PairOutcome {
    match item {
        BatchItem::Pair { line, record } => logging::with_pair_context(&record.id, || {
            match pipeline::convert_raw(&record.question, &record.answer, conjugator) {
                Ok(result) => PairOutcome::converted(*line, &record.id, &result),
                Err(error) => PairOutcome::rejected(*line, &record.id, describe(&error)),
            }
        }),
        BatchItem::Malformed { line, id, error } => {
            crate::log_error!(codes::tokens::MALFORMED_RECORD, "Skipping malformed line",
                "line" => line
            );
            PairOutcome::rejected(*line, id, error.clone())
        }
    }
}

fn describe(error: &PipelineError) -> String {
    format!("[{}] {}", error.error_code().as_str(), error)
}

/// Convert pairs one after another on the calling thread
pub fn convert_sequential(
    items: &[BatchItem],
    conjugator: &dyn Conjugator,
    config: &BatchConfig,
) -> Result<BatchResults, BatchError> {
    let start_time = Instant::now();
    check_limit(items)?;

    let mut results = BatchResults::new();
    results.pairs_discovered = items.len();

    for (done, item) in items.iter().enumerate() {
        let outcome = convert_item(item, conjugator);
        let failed = !outcome.is_converted();
        results.add(outcome);

        if config.progress_reporting && (done + 1) % MAX_CHUNK_SIZE == 0 {
            crate::log_info!("Batch progress", "done" => done + 1, "total" => items.len());
        }

        if failed && config.fail_fast {
            crate::log_warning!("Fail-fast mode enabled, stopping batch conversion",
                "line" => item.line()
            );
            break;
        }
    }

    results.processing_duration = start_time.elapsed();
    log_completion(&results, 1);
    Ok(results)
}

/// Convert pairs across `config.max_threads` workers, chunk by chunk
pub fn convert_parallel(
    items: &[BatchItem],
    conjugator: Arc<dyn Conjugator>,
    config: &BatchConfig,
) -> Result<BatchResults, BatchError> {
    let start_time = Instant::now();
    check_limit(items)?;

    let mut results = BatchResults::new();
    results.pairs_discovered = items.len();

    if items.is_empty() {
        results.processing_duration = start_time.elapsed();
        return Ok(results);
    }

    let threads = config.max_threads.max(1);
    let chunk_size = calculate_chunk_size(items.len(), threads) * threads;

    crate::log_debug!("Parallel conversion configuration",
        "total_pairs" => items.len(),
        "chunk_size" => chunk_size,
        "threads" => threads
    );

    for chunk in items.chunks(chunk_size) {
        let chunk_results = convert_chunk_parallel(chunk, &conjugator, threads)?;
        results.merge(chunk_results);

        if config.progress_reporting {
            crate::log_info!("Batch progress",
                "done" => results.pairs_processed,
                "total" => items.len()
            );
        }

        if config.fail_fast && results.rejected_count() > 0 {
            crate::log_warning!("Fail-fast mode enabled, stopping batch conversion");
            break;
        }
    }

    results.outcomes.sort_by_key(|outcome| outcome.line);
    results.processing_duration = start_time.elapsed();
    log_completion(&results, threads);
    Ok(results)
}

fn convert_chunk_parallel(
    items: &[BatchItem],
    conjugator: &Arc<dyn Conjugator>,
    threads: usize,
) -> Result<BatchResults, BatchError> {
    let results = Arc::new(Mutex::new(BatchResults::new()));

    let mut handles = Vec::new();
    let items_per_thread = items.len().div_ceil(threads);

    for thread_id in 0..threads {
        let start_idx = thread_id * items_per_thread;
        let end_idx = ((thread_id + 1) * items_per_thread).min(items.len());

        if start_idx >= items.len() {
            break;
        }

        let thread_items: Vec<BatchItem> = items[start_idx..end_idx].to_vec();
        let results_clone = Arc::clone(&results);
        let conjugator = Arc::clone(conjugator);

        let handle = thread::spawn(move || {
            for item in &thread_items {
                let outcome = convert_item(item, conjugator.as_ref());
                let mut guard = results_clone
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                guard.add(outcome);
            }
        });

        handles.push(handle);
    }

    for handle in handles {
        handle
            .join()
            .map_err(|_| BatchError::thread_failure("Worker panicked during conversion"))?;
    }

    Arc::try_unwrap(results)
        .map_err(|_| BatchError::thread_failure("Results still shared after workers finished"))?
        .into_inner()
        .map_err(|_| BatchError::thread_failure("Results lock poisoned"))
}

/// Pairs handed to each worker per chunk
fn calculate_chunk_size(total_pairs: usize, max_threads: usize) -> usize {
    const MIN_CHUNK_SIZE: usize = 1;

    let ideal_chunk_size = total_pairs.div_ceil(max_threads.max(1));
    ideal_chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE)
}

fn check_limit(items: &[BatchItem]) -> Result<(), BatchError> {
    if items.len() > MAX_PAIRS_PER_BATCH {
        return Err(BatchError::LimitExceeded {
            count: items.len(),
            max: MAX_PAIRS_PER_BATCH,
        });
    }
    Ok(())
}

fn log_completion(results: &BatchResults, threads: usize) {
    crate::log_success!(
        codes::success::BATCH_COMPLETE,
        "Batch conversion completed",
        "pairs_processed" => results.pairs_processed,
        "converted" => results.converted_count(),
        "rejected" => results.rejected_count(),
        "threads_used" => threads,
        "duration_ms" => format!("{:.2}", results.processing_duration.as_secs_f64() * 1000.0)
    );
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Convert already-parsed items with the given configuration
pub fn convert_items(
    items: &[BatchItem],
    conjugator: Arc<dyn Conjugator>,
    config: &BatchConfig,
) -> Result<BatchResults, BatchError> {
    if config.max_threads <= 1 {
        convert_sequential(items, conjugator.as_ref(), config)
    } else {
        convert_parallel(items, conjugator, config)
    }
}

/// Read a `.jsonl` file and convert every pair in it
pub fn convert_file(
    path: &Path,
    conjugator: Arc<dyn Conjugator>,
    config: &BatchConfig,
) -> Result<BatchResults, BatchError> {
    crate::log_info!("Starting batch conversion",
        "file" => path.display(),
        "max_threads" => config.max_threads
    );

    let items = read_pairs(path)?;
    if items.is_empty() {
        return Err(BatchError::NoInput {
            path: path.display().to_string(),
        });
    }

    convert_items(&items, conjugator, config)
}

/// Batch processing capabilities
#[derive(Debug, Clone)]
pub struct BatchInfo {
    pub max_recommended_threads: usize,
    pub max_worker_threads: usize,
    pub max_pairs_per_batch: usize,
    pub max_chunk_size: usize,
    pub supported_file_extensions: Vec<String>,
}

impl BatchInfo {
    pub fn summary(&self) -> String {
        format!(
            "Batch converter: up to {} threads ({} recommended), {} pairs per batch, .{} input",
            self.max_worker_threads,
            self.max_recommended_threads,
            self.max_pairs_per_batch,
            self.supported_file_extensions.join(", .")
        )
    }
}

pub fn get_batch_info() -> BatchInfo {
    BatchInfo {
        max_recommended_threads: thread::available_parallelism()
            .map(|n| n.get().min(MAX_WORKER_THREADS))
            .unwrap_or(4),
        max_worker_threads: MAX_WORKER_THREADS,
        max_pairs_per_batch: MAX_PAIRS_PER_BATCH,
        max_chunk_size: MAX_CHUNK_SIZE,
        supported_file_extensions: vec!["jsonl".to_string()],
    }
}
