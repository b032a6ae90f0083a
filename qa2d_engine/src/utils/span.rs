//! Token range tracking
//!
//! Positions in this crate are word indices into a token sequence rather than
//! byte offsets, so a span is just an inclusive pair of indices.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range of token indices `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

impl TokenRange {
    /// Create a new range; `start` must not be after `end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "TokenRange start must not be after end");
        Self { start, end }
    }

    /// Range covering a single token
    pub fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A range always covers at least one token
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Smallest range covering both ranges
    pub fn merge(self, other: TokenRange) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Grow the range so it covers `index`
    pub fn extend_to(self, index: usize) -> Self {
        self.merge(TokenRange::single(index))
    }
}

impl fmt::Display for TokenRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "[{}]", self.start)
        } else {
            write!(f, "[{}..={}]", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_basics() {
        let range = TokenRange::new(2, 4);
        assert_eq!(range.len(), 3);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn test_range_merge_and_extend() {
        let range = TokenRange::single(3).extend_to(1);
        assert_eq!(range, TokenRange::new(1, 3));

        let merged = TokenRange::new(0, 1).merge(TokenRange::new(5, 6));
        assert_eq!(merged, TokenRange::new(0, 6));
    }

    #[test]
    fn test_range_display() {
        assert_eq!(TokenRange::single(2).to_string(), "[2]");
        assert_eq!(TokenRange::new(0, 3).to_string(), "[0..=3]");
    }
}
