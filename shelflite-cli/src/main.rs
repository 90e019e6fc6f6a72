// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! ShelfLite CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    // Determine log level from CLI args or environment variable
    let log_level = if cli.verbose {
        // -v/--verbose flag takes precedence
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        // --log-level flag
        level.to_level_filter()
    } else {
        // Default to Warn (can still be overridden by RUST_LOG env var)
        log::LevelFilter::Warn
    };

    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    // Handle commands
    match cli.command {
        Commands::Version => {
            println!("{} {}", "ShelfLite".bold().green(), shelflite::VERSION);
            println!("Embedded library catalog and reservation store");
            Ok(())
        }

        Commands::Console { sample } => cli::handle_console(cli.path, sample),

        Commands::Add {
            title,
            author,
            isbn,
            status,
        } => cli::handle_add(cli.path, &title, &author, &isbn, status),

        Commands::Detail { book_id, format } => cli::handle_detail(cli.path, book_id, format),

        Commands::Status { identifier, format } => {
            cli::handle_status(cli.path, &identifier, format)
        }

        Commands::List { format } => cli::handle_list(cli.path, format),

        Commands::Update {
            book_id,
            title,
            author,
            isbn,
            status,
        } => cli::handle_update(cli.path, book_id, &title, &author, &isbn, status),

        Commands::Delete { book_id } => cli::handle_delete(cli.path, book_id),

        Commands::Seed { count } => cli::handle_seed(cli.path, count),
    }
}
