//! Errors raised while loading lexical resources

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid lexicon {origin}: {message}")]
    Parse { origin: String, message: String },
}

impl LexiconError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(origin: &str, message: &str) -> Self {
        Self::Parse {
            origin: origin.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> crate::logging::codes::Code {
        crate::logging::codes::morphology::LEXICON_LOAD_FAILURE
    }
}
