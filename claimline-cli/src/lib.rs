//! Claimline CLI library
//!
//! Command-line interface for the claimline claim redlining system.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
