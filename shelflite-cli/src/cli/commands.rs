// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use shelflite::BookStatus;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shelflite",
    about = "ShelfLite - embedded library catalog and reservation store",
    version
)]
pub struct Cli {
    /// Database directory
    #[arg(short, long, global = true, default_value = "./shelflite-db")]
    pub path: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<log::Level>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for record-returning commands
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive console (numbered menu)
    Console {
        /// Seed sample books into an empty catalog before starting
        #[arg(long)]
        sample: bool,
    },

    /// Add a new book
    Add {
        title: String,
        author: String,
        isbn: String,
        /// Available or Reserved
        #[arg(default_value = "Available")]
        status: BookStatus,
    },

    /// Show a book's detail by BookID
    Detail {
        book_id: u64,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Find reservation status by BookID (LB...), UserID (LU...),
    /// ReservationID (LR...), or Title
    Status {
        identifier: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List every book in the catalog
    List {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Overwrite a book's title, author, ISBN, and status
    Update {
        book_id: u64,
        title: String,
        author: String,
        isbn: String,
        status: BookStatus,
    },

    /// Delete a book (releases its reservation first)
    Delete { book_id: u64 },

    /// Seed sample books into an empty catalog
    Seed {
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,
    },

    /// Show version information
    Version,
}
