//! `convert` and `info` command bodies

use crate::discovery;
use qa2d_engine::batch::{self, BatchConfig, BatchError, BatchResults};
use qa2d_engine::config::build_info;
use qa2d_engine::lexicon;
use qa2d_engine::logging::codes;
use qa2d_engine::pipeline;
use qa2d_engine::{log_error, log_info, log_success, log_warning};
use qa2d_engine::{Conjugator, EnglishConjugator};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub threads: usize,
    pub fail_fast: bool,
    pub progress: bool,
}

#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub files: usize,
    pub pairs: usize,
    pub converted: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub duration: Duration,
}

impl ConvertSummary {
    fn add(&mut self, results: &BatchResults) {
        self.files += 1;
        self.pairs += results.pairs_processed;
        self.converted += results.converted_count();
        self.rejected += results.rejected_count();
    }
}

/// Convert every pair of every input file, writing one JSON line per pair
pub fn run_convert(options: &ConvertOptions) -> Result<ConvertSummary, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let inputs = discovery::discover_inputs(&options.input)?;

    log_info!("Discovered input files",
        "count" => inputs.len(),
        "path" => options.input.display()
    );

    let conjugator: Arc<dyn Conjugator> = Arc::new(EnglishConjugator::new()?);
    let config = BatchConfig::default()
        .with_threads(options.threads)
        .with_fail_fast(options.fail_fast)
        .with_progress(options.progress);

    let mut writer: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut summary = ConvertSummary::default();
    for input in &inputs {
        let results = match batch::convert_file(input, Arc::clone(&conjugator), &config) {
            Ok(results) => results,
            Err(e @ (BatchError::NoInput { .. } | BatchError::Io { .. })) => {
                log_warning!("Skipping input file",
                    "file" => input.display(),
                    "error" => e
                );
                summary.skipped += 1;
                if options.fail_fast {
                    break;
                }
                continue;
            }
            Err(e) => {
                log_error!(e.error_code(), "Batch conversion failed",
                    "file" => input.display(),
                    "error" => e
                );
                return Err(e.into());
            }
        };

        results.write_jsonl(&mut writer)?;
        summary.add(&results);

        if options.fail_fast && results.rejected_count() > 0 {
            break;
        }
    }
    writer.flush()?;

    summary.duration = start.elapsed();
    log_success!(codes::success::BATCH_COMPLETE, "Conversion finished",
        "files" => summary.files,
        "pairs" => summary.pairs,
        "converted" => summary.converted,
        "rejected" => summary.rejected,
        "skipped" => summary.skipped,
        "duration_ms" => summary.duration.as_millis()
    );

    Ok(summary)
}

/// Engine, configuration and lexicon summary for `qa2d info`
pub fn info_report() -> Result<String, Box<dyn std::error::Error>> {
    let conjugator = EnglishConjugator::new()?;
    let validation = match pipeline::validate_pipeline() {
        Ok(()) => "ok".to_string(),
        Err(reason) => format!("FAILED ({})", reason),
    };

    Ok(format!(
        "qa2d v{}\n\n{}\n\n{}\n\nLexicon:\n\
         - Prepositions: {}\n\
         - Irregular verbs: {}\n\
         - Build profile: {}\n\
         - Self-check: {}",
        env!("CARGO_PKG_VERSION"),
        pipeline::get_pipeline_info().report(),
        batch::get_batch_info().summary(),
        lexicon::common_prepositions().len(),
        conjugator.irregular_count(),
        build_info::profile(),
        validation
    ))
}
