// Internal modules
pub mod analysis;
pub mod batch;
pub mod classification;
pub mod config;
pub mod lexicon;
#[macro_use]
pub mod logging;
pub mod morphology;
pub mod pipeline;
pub mod splice;
pub mod tokens;
pub mod transform;
pub mod utils;

// Re-export key types for library consumers
pub use batch::{BatchConfig, BatchError, BatchResults, PairOutcome, PairStatus};
pub use classification::GapType;
pub use morphology::{Conjugator, EnglishConjugator, Inflection};
pub use pipeline::{convert, convert_raw, PipelineError, PipelineResult};
pub use splice::Declarative;
pub use tokens::{RawToken, TokenSequence};
