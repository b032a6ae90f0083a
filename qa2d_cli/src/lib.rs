//! Library side of the `qa2d` binary, split out so the commands are testable

pub mod commands;
pub mod discovery;
pub mod log_bridge;
