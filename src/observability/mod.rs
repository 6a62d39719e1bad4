//! Observability for the briefing site
//!
//! - Structured JSON lifecycle logs (`Logger`, `Event`)
//! - Loader diagnostics replayed through the same logger
//! - HTTP request tracing via `tracing` for the server
//!
//! # Usage
//!
//! ```ignore
//! use briefings::observability::{log_event_with_fields, log_report, Event};
//!
//! log_event_with_fields(Event::ScanBegin, &[("dir", "public/json")]);
//! let report = loader.load_all();
//! log_report(&report);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::briefing::LoadReport;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_error() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

/// Replays a report's diagnostics and logs its totals
pub fn log_report(report: &LoadReport) {
    for diagnostic in &report.diagnostics {
        Logger::diagnostic(diagnostic);
    }

    let valid = report.valid_count().to_string();
    let invalid = report.invalid_count().to_string();
    log_event_with_fields(
        Event::ScanComplete,
        &[("valid", valid.as_str()), ("invalid", invalid.as_str())],
    );
}

/// Installs the global `tracing` subscriber used for HTTP request logs.
///
/// `RUST_LOG` controls the filter (default `info`). Calling it twice is a
/// no-op.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    if result.is_err() {
        Logger::trace("TRACING_ALREADY_INITIALIZED", &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::Diagnostic;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::ScanBegin);
        log_event_with_fields(Event::ConfigLoaded, &[("data_dir", "/tmp/test")]);
    }

    #[test]
    fn test_log_report() {
        let report = LoadReport {
            diagnostics: vec![Diagnostic::warn("a.json", "empty file, skipped")],
            ..LoadReport::default()
        };
        log_report(&report);
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing(false);
        init_tracing(true);
    }
}
