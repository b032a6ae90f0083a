//! Question classification
//!
//! Computes the wh-phrase span, picks one of seven gap types and derives the
//! index at which the answer is inserted.

pub mod error;
pub mod gap;
pub mod placement;
pub mod wh_span;

pub use error::{PlacementError, PlacementResult};
pub use gap::GapType;
pub use placement::{classify, direct_object_gap, Placement};
pub use wh_span::wh_span;
