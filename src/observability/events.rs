//! Lifecycle events
//!
//! Events are explicit and typed; each maps to one stable log name.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    ConfigLoaded,

    // Loading
    ScanBegin,
    ScanComplete,
    DirectoryUnavailable,

    // Index
    IndexWritten,

    // Static build
    BuildBegin,
    PageWritten,
    BuildComplete,

    // Server
    ServerListening,
    ServerStopped,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::ScanBegin => "SCAN_BEGIN",
            Event::ScanComplete => "SCAN_COMPLETE",
            Event::DirectoryUnavailable => "DIRECTORY_UNAVAILABLE",

            Event::IndexWritten => "INDEX_WRITTEN",

            Event::BuildBegin => "BUILD_BEGIN",
            Event::PageWritten => "PAGE_WRITTEN",
            Event::BuildComplete => "BUILD_COMPLETE",

            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Event::DirectoryUnavailable)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
