//! Error types for the competenties library.
//!
//! Every variant renders as a single line of the form `<Kind>: <detail>`, so a
//! caller can report any failure as `Error: {err}` without further formatting.
//! Rejected filter values are shown with control characters escaped.

use std::path::PathBuf;
use thiserror::Error;

use crate::vocabulary::Dimension;

/// Main error type for competenties operations.
#[derive(Debug, Error)]
pub enum CompetentiesError {
    /// A skill, layer or activity filter is not a member of its enumeration.
    #[error(
        "{}: '{}' (valid {}: {})",
        .dimension.invalid_kind(),
        .value.escape_debug(),
        .dimension.plural(),
        .valid.join(", ")
    )]
    InvalidFilterValue {
        dimension: Dimension,
        value: String,
        valid: &'static [&'static str],
    },

    /// A level filter is not an integer in 1..=4.
    #[error("InvalidLevel: '{}' (allowed range: 1-4)", .value.escape_debug())]
    InvalidLevel { value: String },

    /// The dataset file does not exist.
    #[error("DataFileNotFound: {}", .path.display())]
    DataFileNotFound { path: PathBuf },

    /// The dataset file exists but could not be read.
    #[error("DataFileUnreadable: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset file is not valid JSON of the expected shape.
    #[error("InvalidDataFile: {}: {source}", .path.display())]
    InvalidDataFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every filter was valid, but together they match nothing.
    #[error("NoResults: no {dataset} found with the specified filters")]
    NoResults { dataset: &'static str },
}

impl CompetentiesError {
    /// Short machine-readable name of the failure, matching the rendered prefix.
    pub fn kind(&self) -> &'static str {
        match self {
            CompetentiesError::InvalidFilterValue { dimension, .. } => dimension.invalid_kind(),
            CompetentiesError::InvalidLevel { .. } => "InvalidLevel",
            CompetentiesError::DataFileNotFound { .. } => "DataFileNotFound",
            CompetentiesError::Io { .. } => "DataFileUnreadable",
            CompetentiesError::InvalidDataFile { .. } => "InvalidDataFile",
            CompetentiesError::NoResults { .. } => "NoResults",
        }
    }

    /// True when the caller supplied a bad filter, as opposed to a data problem.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CompetentiesError::InvalidFilterValue { .. } | CompetentiesError::InvalidLevel { .. }
        )
    }
}

/// Result type alias for competenties operations.
pub type Result<T> = std::result::Result<T, CompetentiesError>;
