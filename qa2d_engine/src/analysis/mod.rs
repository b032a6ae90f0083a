//! Question and answer analysis

pub mod answer;
pub mod error;
pub mod question;

pub use answer::AnswerSpan;
pub use error::{AnalysisError, AnalysisResult};
pub use question::{Question, QuestionFlags};
