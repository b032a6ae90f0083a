// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    analysis: AnalysisLimits,
    batch: BatchLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct AnalysisLimits {
    max_question_tokens: usize,
    max_answer_tokens: usize,
    max_ancestor_hops: usize,
}

#[derive(serde::Deserialize)]
struct BatchLimits {
    max_worker_threads: usize,
    max_pairs_per_batch: usize,
    max_chunk_size: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_events_per_pair: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/preps.txt");
    println!("cargo:rerun-if-changed=data/irregular_verbs.toml");
    println!("cargo:rerun-if-env-changed=QA2D_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=QA2D_CONFIG_DIR");

    let profile = env::var("QA2D_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("QA2D_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of qa2d_engine
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);

    println!(
        "cargo:warning=Generated constants from {}",
        config_path.display()
    );
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_TOKENS: usize = 10_000;
    const ABSOLUTE_MAX_THREADS: usize = 256;

    if config.analysis.max_question_tokens == 0 || config.analysis.max_answer_tokens == 0 {
        panic!("LIMITS: token limits must be greater than zero");
    }

    if config.analysis.max_question_tokens > ABSOLUTE_MAX_TOKENS
        || config.analysis.max_answer_tokens > ABSOLUTE_MAX_TOKENS
    {
        panic!("LIMITS: token limits exceed absolute maximum");
    }

    if config.analysis.max_ancestor_hops == 0 {
        panic!("LIMITS: max_ancestor_hops must be at least 1");
    }

    if config.batch.max_worker_threads == 0 || config.batch.max_worker_threads > ABSOLUTE_MAX_THREADS {
        panic!("LIMITS: max_worker_threads must be within 1..={}", ABSOLUTE_MAX_THREADS);
    }

    if config.batch.max_chunk_size == 0 {
        panic!("LIMITS: max_chunk_size must be greater than zero");
    }

    if profile == "production" && config.analysis.max_question_tokens > 1_000 {
        panic!("PRODUCTION: max_question_tokens too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod analysis {{
        pub const MAX_QUESTION_TOKENS: usize = {};
        pub const MAX_ANSWER_TOKENS: usize = {};
        pub const MAX_ANCESTOR_HOPS: usize = {};
    }}

    pub mod batch {{
        pub const MAX_WORKER_THREADS: usize = {};
        pub const MAX_PAIRS_PER_BATCH: usize = {};
        pub const MAX_CHUNK_SIZE: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_EVENTS_PER_PAIR: usize = {};
    }}
}}
"#,
        profile,
        config.analysis.max_question_tokens,
        config.analysis.max_answer_tokens,
        config.analysis.max_ancestor_hops,
        config.batch.max_worker_threads,
        config.batch.max_pairs_per_batch,
        config.batch.max_chunk_size,
        config.logging.log_buffer_size,
        config.logging.max_log_events_per_pair,
    );

    fs::write(output_path, constants_code).unwrap();
}
