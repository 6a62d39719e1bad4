//! CLI-specific error types
//!
//! Every CLI error ends the process with exit code 1.

use std::fmt;
use std::io;

use crate::briefing::BriefingError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, output directory)
    IoError,
    /// Briefing directory missing or unlistable
    DirectoryUnavailable,
    /// At least one briefing failed validation
    ValidationFailed,
    /// Static build failed
    BuildFailed,
    /// HTTP server failed to start or crashed
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BRIEFINGS_CLI_CONFIG_ERROR",
            Self::IoError => "BRIEFINGS_CLI_IO_ERROR",
            Self::DirectoryUnavailable => "BRIEFINGS_CLI_DIRECTORY_UNAVAILABLE",
            Self::ValidationFailed => "BRIEFINGS_CLI_VALIDATION_FAILED",
            Self::BuildFailed => "BRIEFINGS_CLI_BUILD_FAILED",
            Self::ServeFailed => "BRIEFINGS_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn validation_failed(failed: usize) -> Self {
        Self::new(
            CliErrorCode::ValidationFailed,
            format!("{} briefing file(s) failed validation", failed),
        )
    }

    pub fn build_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BuildFailed, msg)
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<BriefingError> for CliError {
    fn from(e: BriefingError) -> Self {
        let code = match e {
            BriefingError::DirectoryUnavailable { .. } => CliErrorCode::DirectoryUnavailable,
            BriefingError::Io(_) | BriefingError::Index { .. } => CliErrorCode::IoError,
            _ => CliErrorCode::BuildFailed,
        };
        Self::new(code, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
