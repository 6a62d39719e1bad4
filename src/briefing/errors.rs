//! Briefing error types
//!
//! Error codes:
//! - BRIEFING_PARSE_ERROR (per file, recovered)
//! - BRIEFING_MISSING_REQUIRED_FIELD (per file, recovered)
//! - BRIEFING_EMPTY_FILE (per file, skipped)
//! - BRIEFING_UNREADABLE (per file, recovered)
//! - BRIEFING_DUPLICATE_SLUG (per file, recovered)
//! - BRIEFING_DIRECTORY_UNAVAILABLE (whole batch)
//! - BRIEFING_NOT_FOUND (single lookup)
//! - BRIEFING_INDEX_ERROR (index.json)

use thiserror::Error;

/// Result type for briefing operations
pub type BriefingResult<T> = Result<T, BriefingError>;

/// Briefing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BriefingError {
    #[error("Invalid JSON in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("{file} is missing required fields: {}", .fields.join(", "))]
    MissingRequiredField { file: String, fields: Vec<String> },

    #[error("{0} is empty")]
    EmptyFile(String),

    #[error("Failed to read {file}: {message}")]
    Unreadable { file: String, message: String },

    #[error("{file} reuses slug '{slug}'")]
    DuplicateSlug { file: String, slug: String },

    #[error("Briefing directory unavailable: {path}: {message}")]
    DirectoryUnavailable { path: String, message: String },

    #[error("Briefing not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid index file {path}: {message}")]
    Index { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl BriefingError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            BriefingError::Parse { .. } => "BRIEFING_PARSE_ERROR",
            BriefingError::MissingRequiredField { .. } => "BRIEFING_MISSING_REQUIRED_FIELD",
            BriefingError::EmptyFile(_) => "BRIEFING_EMPTY_FILE",
            BriefingError::Unreadable { .. } => "BRIEFING_UNREADABLE",
            BriefingError::DuplicateSlug { .. } => "BRIEFING_DUPLICATE_SLUG",
            BriefingError::DirectoryUnavailable { .. } => "BRIEFING_DIRECTORY_UNAVAILABLE",
            BriefingError::RecordNotFound(_) => "BRIEFING_NOT_FOUND",
            BriefingError::Index { .. } => "BRIEFING_INDEX_ERROR",
            BriefingError::Io(_) => "BRIEFING_IO_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            BriefingError::RecordNotFound(_) => 404,
            _ => 500,
        }
    }

    /// Returns the source file name for per-file errors
    pub fn file(&self) -> Option<&str> {
        match self {
            BriefingError::Parse { file, .. }
            | BriefingError::MissingRequiredField { file, .. }
            | BriefingError::Unreadable { file, .. }
            | BriefingError::DuplicateSlug { file, .. } => Some(file),
            BriefingError::EmptyFile(file) => Some(file),
            _ => None,
        }
    }

    /// Returns whether the error ends the whole batch rather than one file
    pub fn is_batch_fatal(&self) -> bool {
        matches!(self, BriefingError::DirectoryUnavailable { .. })
    }
}

impl From<std::io::Error> for BriefingError {
    fn from(e: std::io::Error) -> Self {
        BriefingError::Io(e.to_string())
    }
}
