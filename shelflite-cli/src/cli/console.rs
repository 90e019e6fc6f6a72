// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Interactive console - a numbered menu REPL over the catalog

use crate::cli::commands::OutputFormat;
use crate::cli::output;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shelflite::{BookStatus, CatalogError, LibraryService};
use std::path::PathBuf;
use std::str::FromStr;

pub fn handle_console(path: PathBuf, sample: bool) -> Result<(), Box<dyn std::error::Error>> {
    let service = LibraryService::open(path)?;
    if sample {
        service.seed_sample_books(shelflite::DEFAULT_SAMPLE_SIZE)?;
    }

    let mut rl = DefaultEditor::new()?;
    println!("{}", "ShelfLite Library Console".bold().green());

    loop {
        print_menu();
        let choice = match read_line(&mut rl, "Enter your choice: ") {
            Some(line) => line,
            None => break,
        };

        let result = match choice.trim() {
            "1" => add_book(&mut rl, &service),
            "2" => book_detail(&mut rl, &service),
            "3" => reservation_status(&mut rl, &service),
            "4" => list_books(&service),
            "5" => update_book(&mut rl, &service),
            "6" => delete_book(&mut rl, &service),
            "7" => break,
            "" => Ok(()),
            other => {
                println!("{}", format!("Unknown choice: {}", other).red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}", format!("Error: {}", e).red());
        }
    }

    println!("Exiting the system. Goodbye!");
    service.shutdown()?;
    Ok(())
}

fn print_menu() {
    println!();
    println!("1. Add a new book.");
    println!("2. Find a book's detail based on BookID.");
    println!("3. Find a book's reservation status.");
    println!("4. Find all the books in the database.");
    println!("5. Modify/update book details.");
    println!("6. Delete a book.");
    println!("7. Exit.");
}

/// Read one line; `None` means the user ended the session (Ctrl-C/Ctrl-D)
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Option<String> {
    match rl.readline(prompt) {
        Ok(line) => {
            let _ = rl.add_history_entry(line.as_str());
            Some(line)
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
        Err(e) => {
            println!("{}", format!("Input error: {}", e).red());
            None
        }
    }
}

fn prompt_status(rl: &mut DefaultEditor) -> Option<BookStatus> {
    loop {
        let line = read_line(rl, "Enter the book status (Available/Reserved): ")?;
        match BookStatus::from_str(line.trim()) {
            Ok(status) => return Some(status),
            Err(e) => println!("{}", e.red()),
        }
    }
}

fn prompt_book_id(rl: &mut DefaultEditor, prompt: &str) -> Option<u64> {
    loop {
        let line = read_line(rl, prompt)?;
        match line.trim().parse::<u64>() {
            Ok(id) => return Some(id),
            Err(_) => println!("{}", "BookID must be a positive integer.".red()),
        }
    }
}

fn add_book(rl: &mut DefaultEditor, service: &LibraryService) -> Result<(), CatalogError> {
    let (title, author, isbn, status) = match (
        read_line(rl, "Enter the book title: "),
        read_line(rl, "Enter the book author: "),
        read_line(rl, "Enter the book ISBN: "),
        prompt_status(rl),
    ) {
        (Some(t), Some(a), Some(i), Some(s)) => (t, a, i, s),
        _ => return Ok(()),
    };

    match service.add_book(title.trim(), author.trim(), isbn.trim(), status) {
        Ok(book) => println!(
            "{}",
            format!("Book added successfully (BookID {})", book.id).green()
        ),
        Err(CatalogError::DuplicateKey(key)) => {
            println!("{}", format!("A book with {} already exists.", key).red())
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn book_detail(rl: &mut DefaultEditor, service: &LibraryService) -> Result<(), CatalogError> {
    let id = match prompt_book_id(rl, "Enter the BookID: ") {
        Some(id) => id,
        None => return Ok(()),
    };
    match service.book_detail(id)? {
        Some(detail) => print!("{}", output::format_details(&[detail], OutputFormat::Table)),
        None => println!("{}", "Book not found.".yellow()),
    }
    Ok(())
}

fn reservation_status(
    rl: &mut DefaultEditor,
    service: &LibraryService,
) -> Result<(), CatalogError> {
    let identifier =
        match read_line(rl, "Enter the identifier (BookID, UserID, ReservationID or Title): ") {
            Some(line) => line,
            None => return Ok(()),
        };
    match service.find_status(identifier.trim())? {
        Some(status) => print!("{}", output::format_status(&status, OutputFormat::Table)),
        None => println!("{}", "Book or reservation not found.".yellow()),
    }
    Ok(())
}

fn list_books(service: &LibraryService) -> Result<(), CatalogError> {
    let details = service.all_books()?;
    if details.is_empty() {
        println!("{}", "No books found.".yellow());
    } else {
        print!("{}", output::format_details(&details, OutputFormat::Table));
    }
    Ok(())
}

fn update_book(rl: &mut DefaultEditor, service: &LibraryService) -> Result<(), CatalogError> {
    let id = match prompt_book_id(rl, "Enter the BookID for the book you want to modify: ") {
        Some(id) => id,
        None => return Ok(()),
    };
    let (title, author, isbn, status) = match (
        read_line(rl, "Enter the new book title: "),
        read_line(rl, "Enter the new book author: "),
        read_line(rl, "Enter the new book ISBN: "),
        prompt_status(rl),
    ) {
        (Some(t), Some(a), Some(i), Some(s)) => (t, a, i, s),
        _ => return Ok(()),
    };

    match service.update_book(id, title.trim(), author.trim(), isbn.trim(), status)? {
        Some(_) => println!(
            "{}",
            format!("Book details for {} updated successfully!", id).green()
        ),
        None => println!("{}", "Book not found.".yellow()),
    }
    Ok(())
}

fn delete_book(rl: &mut DefaultEditor, service: &LibraryService) -> Result<(), CatalogError> {
    let id = match prompt_book_id(rl, "Enter the BookID for the book you want to delete: ") {
        Some(id) => id,
        None => return Ok(()),
    };
    if service.delete_book(id)? {
        println!(
            "{}",
            format!("Book with BookID {} deleted successfully!", id).green()
        );
    } else {
        println!("{}", "Book not found.".yellow());
    }
    Ok(())
}
