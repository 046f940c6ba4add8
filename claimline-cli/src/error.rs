//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Document could not be decoded to plain text
    DecodeError(String),
    /// Configuration error
    ConfigError(String),
    /// Comparison error from core
    CompareError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::DecodeError(msg) => write!(f, "Decode error: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::CompareError(msg) => write!(f, "Comparison error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("claims.txt".to_string());
        assert_eq!(error.to_string(), "File not found: claims.txt");
    }

    #[test]
    fn test_decode_error_display() {
        let error = CliError::DecodeError("not a docx container".to_string());
        assert_eq!(error.to_string(), "Decode error: not a docx container");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown style".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown style");
    }

    #[test]
    fn test_compare_error_display() {
        let error = CliError::CompareError("diff engine failed".to_string());
        assert_eq!(error.to_string(), "Comparison error: diff engine failed");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("claims.txt".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("FileNotFound"));
        assert!(debug_str.contains("claims.txt"));
    }
}
