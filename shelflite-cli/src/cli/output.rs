// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use crate::cli::commands::OutputFormat;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use shelflite::{BookDetail, ReservationStatus};

const DETAIL_COLUMNS: [&str; 9] = [
    "BookID",
    "Title",
    "Author",
    "ISBN",
    "Status",
    "UserID",
    "Name",
    "Email",
    "ReservationDate",
];

const STATUS_COLUMNS: [&str; 7] = [
    "BookID",
    "Title",
    "Status",
    "UserID",
    "Name",
    "Email",
    "ReservationDate",
];

/// Format joined book rows in the selected output format
pub fn format_details(details: &[BookDetail], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => details_table(details),
        OutputFormat::Json => to_json(details),
    }
}

/// Format a reservation-status row in the selected output format
pub fn format_status(status: &ReservationStatus, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => status_table(status),
        OutputFormat::Json => to_json(status),
    }
}

fn details_table(details: &[BookDetail]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header_cells(&DETAIL_COLUMNS));

    for detail in details {
        table.add_row(detail_row(detail));
    }

    format!("{}\n", table)
}

fn status_table(status: &ReservationStatus) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header_cells(&STATUS_COLUMNS));
    table.add_row(status_row(status));

    format!("{}\n", table)
}

fn header_cells(columns: &[&str]) -> Vec<Cell> {
    columns
        .iter()
        .map(|col| Cell::new(col).fg(Color::Green))
        .collect()
}

fn detail_row(detail: &BookDetail) -> Vec<String> {
    let book = &detail.book;
    let (user_id, name, email, date) = reservation_cells(detail);
    vec![
        book.id.to_string(),
        book.title.clone(),
        book.author.clone(),
        book.isbn.clone(),
        book.status.to_string(),
        user_id,
        name,
        email,
        date,
    ]
}

fn status_row(status: &ReservationStatus) -> Vec<String> {
    let (book_id, title, book_status) = match &status.book {
        Some(book) => (
            book.id.to_string(),
            book.title.clone(),
            book.status.to_string(),
        ),
        None => (null_cell(), null_cell(), null_cell()),
    };
    let (user_id, name, email) = match &status.user {
        Some(user) => (user.id.clone(), user.name.clone(), user.email.clone()),
        None => (null_cell(), null_cell(), null_cell()),
    };
    let date = status
        .reservation
        .as_ref()
        .map(|r| r.reserved_on.to_string())
        .unwrap_or_else(null_cell);

    vec![book_id, title, book_status, user_id, name, email, date]
}

fn reservation_cells(detail: &BookDetail) -> (String, String, String, String) {
    match &detail.held_by {
        Some(ctx) => {
            let (name, email) = match &ctx.user {
                Some(user) => (user.name.clone(), user.email.clone()),
                None => (null_cell(), null_cell()),
            };
            (
                ctx.reservation.user_id.clone(),
                name,
                email,
                ctx.reservation.reserved_on.to_string(),
            )
        }
        None => (null_cell(), null_cell(), null_cell(), null_cell()),
    }
}

fn null_cell() -> String {
    "NULL".to_string()
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| {
        format!(
            "{}",
            "{\"status\": \"error\", \"error\": \"Could not serialize results to JSON\"}".red()
        )
    })
}
