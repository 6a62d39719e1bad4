//! Collected loader diagnostics
//!
//! The loader never prints. Every warning or error it would have reported is
//! returned as a `Diagnostic`, and callers decide where it goes.

use std::fmt;

use serde::Serialize;

/// Diagnostic level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One `{level, file, message}` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    /// Source file, or `None` for batch-level conditions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(level: Level, file: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            level,
            file: file.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn info(file: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Info, Some(file), message)
    }

    pub fn warn(file: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Warn, Some(file), message)
    }

    pub fn error(file: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Error, Some(file), message)
    }

    /// A diagnostic about the batch as a whole
    pub fn batch_error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, None, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "[{}] {}: {}", self.level, file, self.message),
            None => write!(f, "[{}] {}", self.level, self.message),
        }
    }
}
