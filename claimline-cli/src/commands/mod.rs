//! CLI command implementations

use clap::Subcommand;

pub mod compare;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two document versions and emit a claim-by-claim redline
    Compare(compare::CompareArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available markup styles
    Styles,

    /// List available output formats
    Formats,
}
