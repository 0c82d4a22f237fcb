//! CLI command implementations.

pub mod emit;
pub mod path;
pub mod levels;
pub mod version;
