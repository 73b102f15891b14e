//! Common types and utilities for smitht commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SmithtError};

// ============================================================================
// Output Format
// ============================================================================

/// How a command renders its results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

// ============================================================================
// Source Input
// ============================================================================

/// Name used for source text read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Source text together with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    /// File path, or [`STDIN_NAME`]
    pub name: String,
    /// Full source text
    pub text: String,
}

/// Read source text from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<SourceInput> {
    match path {
        Some(path) if path != Path::new("-") => read_source_file(path),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(SourceInput {
                name: STDIN_NAME.to_string(),
                text,
            })
        }
    }
}

/// Read source text from a file that must exist.
pub fn read_source_file(path: &Path) -> Result<SourceInput> {
    if !path.exists() {
        return Err(SmithtError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(SmithtError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(SourceInput {
        name: path.display().to_string(),
        text: std::fs::read_to_string(path)?,
    })
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when a case file has an extension other than `.toml` or `.json`.
    pub const UNKNOWN_CASE_FORMAT: &str = "Unknown test case format (expected .toml or .json)";

    /// Error when invalid characters are denied.
    pub const INVALID_CHARACTERS: &str = "invalid character(s)";

    /// Error when unit test cases mismatch.
    pub const CASES_FAILED: &str = "case(s) failed";
}
