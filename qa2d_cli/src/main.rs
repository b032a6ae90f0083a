//! # qa2d
//!
//! Turns WH-questions and their answers into declarative sentences.

use clap::{Parser, Subcommand};
use qa2d_cli::commands::{self, ConvertOptions};
use qa2d_cli::log_bridge;
use qa2d_engine::logging::{self, codes};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qa2d", version, about = "Convert question/answer pairs into declarative sentences")]
struct Cli {
    /// Only report warnings and errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Emit log events as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a .jsonl file, or every .jsonl file under a directory
    Convert {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Write results here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Worker threads (defaults to the number of CPUs)
        #[arg(long, short = 'j')]
        threads: Option<usize>,

        /// Stop at the first pair that does not convert
        #[arg(long)]
        fail_fast: bool,
    },
    /// Print engine, configuration and lexicon details
    Info,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = log_bridge::init(cli.quiet, cli.json_logs) {
        eprintln!("Warning: logging setup failed: {}", e);
    }

    let outcome = match cli.command {
        Command::Convert {
            input,
            output,
            threads,
            fail_fast,
        } => {
            let options = ConvertOptions {
                input,
                output,
                threads: threads.unwrap_or_else(num_cpus::get),
                fail_fast,
                progress: !cli.quiet,
            };
            commands::run_convert(&options).map(|summary| {
                if !cli.quiet {
                    eprintln!(
                        "Converted {} of {} pairs from {} file(s) in {:.2}s ({} rejected, {} file(s) skipped)",
                        summary.converted,
                        summary.pairs,
                        summary.files,
                        summary.duration.as_secs_f64(),
                        summary.rejected,
                        summary.skipped
                    );
                }
            })
        }
        Command::Info => commands::info_report().map(|report| println!("{}", report)),
    };

    if let Err(e) = outcome {
        logging::safe_log_error(codes::system::INTERNAL_ERROR, &e.to_string());
        std::process::exit(1);
    }
}
