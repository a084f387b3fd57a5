//! CLI command implementations.

pub mod parse;

pub use parse::{ParseCommand, ParseReport};
