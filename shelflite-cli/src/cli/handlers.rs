// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! One-shot command handlers
//!
//! Each handler opens the service, runs exactly one catalog operation, and
//! shuts the service down so the store session is released. Absence comes
//! back from the library as `None`; only here does it turn into the
//! human-readable "not found" messages.

use crate::cli::commands::OutputFormat;
use crate::cli::output;
use colored::Colorize;
use shelflite::{BookStatus, CatalogError, LibraryService};
use std::path::PathBuf;

type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn handle_add(
    path: PathBuf,
    title: &str,
    author: &str,
    isbn: &str,
    status: BookStatus,
) -> CliResult {
    let service = LibraryService::open(path)?;
    match service.add_book(title, author, isbn, status) {
        Ok(book) => println!(
            "{}",
            format!("Book added successfully (BookID {})", book.id).green()
        ),
        Err(CatalogError::DuplicateKey(key)) => {
            println!("{}", format!("A book with {} already exists.", key).red())
        }
        Err(e) => return Err(e.into()),
    }
    service.shutdown()?;
    Ok(())
}

pub fn handle_detail(path: PathBuf, book_id: u64, format: OutputFormat) -> CliResult {
    let service = LibraryService::open(path)?;
    match service.book_detail(book_id)? {
        Some(detail) => print!("{}", output::format_details(&[detail], format)),
        None => println!("{}", "Book not found.".yellow()),
    }
    service.shutdown()?;
    Ok(())
}

pub fn handle_status(path: PathBuf, identifier: &str, format: OutputFormat) -> CliResult {
    let service = LibraryService::open(path)?;
    match service.find_status(identifier)? {
        Some(status) => print!("{}", output::format_status(&status, format)),
        None => println!("{}", "Book or reservation not found.".yellow()),
    }
    service.shutdown()?;
    Ok(())
}

pub fn handle_list(path: PathBuf, format: OutputFormat) -> CliResult {
    let service = LibraryService::open(path)?;
    let details = service.all_books()?;
    if details.is_empty() {
        println!("{}", "No books found.".yellow());
    } else {
        print!("{}", output::format_details(&details, format));
    }
    service.shutdown()?;
    Ok(())
}

pub fn handle_update(
    path: PathBuf,
    book_id: u64,
    title: &str,
    author: &str,
    isbn: &str,
    status: BookStatus,
) -> CliResult {
    let service = LibraryService::open(path)?;
    match service.update_book(book_id, title, author, isbn, status)? {
        Some(_) => println!(
            "{}",
            format!("Book details for {} updated successfully!", book_id).green()
        ),
        None => println!("{}", "Book not found.".yellow()),
    }
    service.shutdown()?;
    Ok(())
}

pub fn handle_delete(path: PathBuf, book_id: u64) -> CliResult {
    let service = LibraryService::open(path)?;
    if service.delete_book(book_id)? {
        println!(
            "{}",
            format!("Book with BookID {} deleted successfully!", book_id).green()
        );
    } else {
        println!("{}", "Book not found.".yellow());
    }
    service.shutdown()?;
    Ok(())
}

pub fn handle_seed(path: PathBuf, count: usize) -> CliResult {
    let service = LibraryService::open(path)?;
    let inserted = service.seed_sample_books(count)?;
    if inserted == 0 {
        println!("{}", "Catalog already populated, nothing seeded.".yellow());
    } else {
        println!("{}", format!("Seeded {} sample books.", inserted).green());
    }
    service.shutdown()?;
    Ok(())
}
