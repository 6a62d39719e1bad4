//! CLI argument definitions using clap
//!
//! Commands:
//! - briefings validate [--dir <path>]
//! - briefings build [--dir <path>] [--out <path>] [--theme light|dark]
//! - briefings serve [--dir <path>] [--port <port>] [--theme light|dark]
//! - briefings index [--dir <path>]
//!
//! Every command accepts `--config <path>`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::view::Theme;

/// Briefings - validate and publish a directory of creative briefings
#[derive(Parser, Debug)]
#[command(name = "briefings")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default: ./briefings.json if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every briefing file and exit non-zero on any failure
    Validate {
        /// Briefing directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Render the listing, detail and 404 pages to a directory
    Build {
        /// Briefing directory
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,

        /// Page theme
        #[arg(long)]
        theme: Option<Theme>,
    },

    /// Serve the pages and the JSON API over HTTP
    Serve {
        /// Briefing directory
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Page theme
        #[arg(long)]
        theme: Option<Theme>,
    },

    /// Regenerate index.json from the valid briefings
    Index {
        /// Briefing directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
