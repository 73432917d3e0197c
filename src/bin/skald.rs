#!/usr/bin/env rust
//! Skald CLI - Documentation Cross-Reference Curation
//!
//! This binary keeps `@related` annotations in header documentation blocks
//! curated: deterministic ordering, at most three entries, golden overrides
//! respected.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Update(args) => {
            cli::update_command(args)?;
        }
        Commands::Check(args) => {
            cli::check_command(args)?;
        }
        Commands::Curate(args) => {
            cli::curate_command(args)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args)?;
        }
    }

    Ok(())
}
