//! Classification of the operator's input string.

use std::path::{Path, PathBuf};

/// Message shown when the input is neither an existing CSV file nor a URL.
pub const INVALID_INPUT_MESSAGE: &str =
    "Error: Invalid input. Please provide either a single URL or the location of a CSV file.";

/// What a single line of operator input refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Path to an existing `.csv` file.
    Csv(PathBuf),
    /// Anything containing `://`.
    Url(String),
    /// Neither; carries the raw input.
    Invalid(String),
}

/// Classifies `input` verbatim (no trimming).
///
/// A `.csv` suffix only wins when a regular file exists at that path; a missing
/// `.csv` path falls through to the URL check.
pub fn classify(input: &str) -> InputKind {
    if input.ends_with(".csv") && Path::new(input).is_file() {
        InputKind::Csv(PathBuf::from(input))
    } else if input.contains("://") {
        InputKind::Url(input.to_string())
    } else {
        InputKind::Invalid(input.to_string())
    }
}
