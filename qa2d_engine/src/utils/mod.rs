//! Shared primitive types used across the engine stages

pub mod span;

pub use span::TokenRange;
