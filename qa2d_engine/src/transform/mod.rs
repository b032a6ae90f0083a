//! Rewriting the question into declarative order

pub mod agreement;
pub mod reposition;

pub use agreement::{inflect_answer, inflect_question, question_inflection, requested_inflection};
pub use reposition::{relocate_block, reposition, Rearrangement};
