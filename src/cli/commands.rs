//! CLI command implementations
//!
//! Each command resolves the configuration, runs the loader once and
//! reports. Only `serve` starts an async runtime.

use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use crate::briefing::{BriefingLoader, BriefingResult, LoadReport};
use crate::http_server::HttpServer;
use crate::observability::{init_tracing, log_event_with_fields, log_report, Event};
use crate::report::write_report;
use crate::site::Site;
use crate::view::Renderer;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.config.as_deref(), cli.command)
}

/// Run a parsed command
pub fn run_command(config_path: Option<&Path>, cmd: Command) -> CliResult<()> {
    let config = Config::resolve(config_path)?;

    match cmd {
        Command::Validate { dir } => validate(&config.with_data_dir(dir)),
        Command::Build { dir, out, theme } => {
            build(&config.with_data_dir(dir).with_theme(theme), &out)
        }
        Command::Serve { dir, port, theme } => {
            serve(config.with_data_dir(dir).with_port(port).with_theme(theme))
        }
        Command::Index { dir } => index(&config.with_data_dir(dir)),
    }
}

/// Check every briefing file, print one line per file and a summary.
///
/// Always strict, whatever the configured policy.
pub fn validate(config: &Config) -> CliResult<()> {
    log_config(config);

    let loader = BriefingLoader::new(&config.data_dir);
    let report = scan(&loader).unwrap_or_else(|e| LoadReport::batch_failure(&e));

    let mut stdout = io::stdout().lock();
    let summary = write_report(&report, &mut stdout)?;
    stdout.flush()?;

    if summary.passed() {
        Ok(())
    } else {
        Err(CliError::validation_failed(summary.failed))
    }
}

/// Write the static site to `out`
pub fn build(config: &Config, out: &Path) -> CliResult<()> {
    log_config(config);

    let summary = site_for(config)
        .build(out)
        .map_err(|e| CliError::build_failed(e.to_string()))?;
    log_report(&summary.report);

    let out_display = summary.out_dir.display().to_string();
    let pages = summary.pages.to_string();
    log_event_with_fields(
        Event::BuildComplete,
        &[("out_dir", out_display.as_str()), ("pages", pages.as_str())],
    );

    write_response(json!({
        "out_dir": out_display,
        "pages": summary.pages,
        "valid": summary.report.valid_count(),
        "invalid": summary.report.invalid_count(),
        "skipped": summary.report.skipped.len(),
    }))
}

/// Serve the site until interrupted
pub fn serve(config: Config) -> CliResult<()> {
    log_config(&config);

    let site = site_for(&config);
    let log_json = config.log_json();
    let server = HttpServer::with_config(site, config.server);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        init_tracing(log_json);
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Regenerate `index.json` from the valid briefings
pub fn index(config: &Config) -> CliResult<()> {
    log_config(config);

    let loader = BriefingLoader::new(&config.data_dir).with_policy(config.policy);
    let report = scan(&loader)?;

    let path = loader.write_index(&report)?;
    let path_display = path.display().to_string();
    let entries = report.valid_count().to_string();
    log_event_with_fields(
        Event::IndexWritten,
        &[("entries", entries.as_str()), ("path", path_display.as_str())],
    );

    write_response(json!({
        "path": path_display,
        "entries": report.valid_count(),
    }))
}

fn site_for(config: &Config) -> Site {
    let loader = BriefingLoader::new(&config.data_dir).with_policy(config.policy);
    Site::new(loader, Renderer::new(config.theme)).with_listing_source(config.listing_source)
}

fn scan(loader: &BriefingLoader) -> BriefingResult<LoadReport> {
    let dir = loader.dir().display().to_string();
    log_event_with_fields(Event::ScanBegin, &[("dir", dir.as_str())]);

    match loader.scan() {
        Ok(report) => {
            log_report(&report);
            Ok(report)
        }
        Err(e) => {
            let message = e.to_string();
            log_event_with_fields(
                Event::DirectoryUnavailable,
                &[("dir", dir.as_str()), ("message", message.as_str())],
            );
            Err(e)
        }
    }
}

fn log_config(config: &Config) {
    let data_dir = config.data_dir.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("data_dir", data_dir.as_str()),
            ("policy", config.policy.as_str()),
            ("theme", config.theme.as_str()),
        ],
    );
}
