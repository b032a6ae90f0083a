//! Token model for parsed questions and answers
//!
//! Parser output arrives as [`RawToken`] records (CoNLL-U naming, 1-based ids
//! and heads). [`TokenSequence::from_raw`] normalises them into 0-based
//! [`Token`]s whose `head` is `None` at the root. Sequences are immutable:
//! reordering, removal and splicing always build a new sequence with
//! positions and heads recomputed.

pub mod error;
pub mod sequence;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::TokenError;
pub use sequence::{Side, TokenSequence};
pub use token::{RawToken, Token};
