//! # CLI Argument Definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "phub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and exercise Projects Hub catalogs")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write rolling log files into this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Hub settings file (TOML/JSON/YAML) overriding the catalog's `hub` object.
    /// `PHUB__*` environment variables apply on top.
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse and validate a catalog, listing every issue
    Check {
        /// Path to the catalog document (sites.json)
        catalog: PathBuf,
    },
    /// Print the sidebar as the hub would render it
    Tree {
        /// Path to the catalog document (sites.json)
        catalog: PathBuf,
    },
    /// Start the hub on a query string and print the resulting screen
    Resolve {
        /// Path to the catalog document (sites.json)
        catalog: PathBuf,
        /// Query string, e.g. `?site=docs` or `group=tools`
        #[arg(default_value = "")]
        query: String,
    },
    /// Deliver a cross-frame message to a started hub and print the outcome
    Message {
        /// Path to the catalog document (sites.json)
        catalog: PathBuf,
        /// Origin of the sending frame
        #[arg(long)]
        origin: String,
        /// Message payload as JSON, e.g. '{"type":"navigate","siteId":"docs"}'
        payload: String,
        /// Query string the hub starts on
        #[arg(long, default_value = "")]
        query: String,
    },
}
