//! Splicing the answer into the question

pub mod affix;
pub mod splicer;

pub use affix::affix_answer;
pub use splicer::{finalize, splice, Declarative};
