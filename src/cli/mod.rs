//! CLI module for the briefings tool
//!
//! Provides command-line interface for:
//! - validate: Check every briefing file, exit 1 on any failure
//! - build: Render the static site
//! - serve: Serve pages and the JSON API
//! - index: Regenerate index.json

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build, index, run, run_command, serve, validate};
pub use config::{Config, DEFAULT_CONFIG_PATH, LOG_JSON_ENV};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
