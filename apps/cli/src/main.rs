#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod args;
pub mod handlers;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use phub_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let builder = Logger::builder().name("phub").verbosity(cli.verbose);
    let _logger = match &cli.log_dir {
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    tracing::debug!(build = phub::BUILD, "Starting");

    let settings = cli.settings.as_deref();
    match cli.command {
        Command::Check { catalog } => handlers::check::run(&catalog)?,
        Command::Tree { catalog } => handlers::tree::run(&catalog)?,
        Command::Resolve { catalog, query } => handlers::resolve::run(&catalog, &query, settings)?,
        Command::Message { catalog, origin, payload, query } => {
            handlers::message::run(&catalog, &origin, &payload, &query, settings)?;
        },
    }

    Ok(())
}
