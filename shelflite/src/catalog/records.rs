// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog record types
//!
//! Three stored entities (Book, User, Reservation) plus the composite row
//! types returned by joined reads. User and Reservation identifiers are
//! externally supplied strings carrying the "LU"/"LR" namespace prefixes;
//! BookIDs are allocated by the store and never reused.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned book identifier
pub type BookId = u64;

/// Availability state of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Reserved,
}

impl Default for BookStatus {
    fn default() -> Self {
        BookStatus::Available
    }
}

impl std::str::FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "reserved" => Ok(BookStatus::Reserved),
            _ => Err(format!(
                "Unknown book status: {}. Valid options: Available, Reserved",
                s
            )),
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BookStatus::Available => "Available",
            BookStatus::Reserved => "Reserved",
        };
        write!(f, "{}", name)
    }
}

/// A catalog book row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

/// A library user row ("LU"-prefixed identifier)
///
/// Users are reference data: the catalog reads them during joins but never
/// mutates them as part of book lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A reservation row ("LR"-prefixed identifier) linking a user to a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub book_id: BookId,
    pub user_id: String,
    pub reserved_on: NaiveDate,
}

/// Reservation side of a joined book read
///
/// The user is optional: a reservation whose user row is missing still
/// appears, with empty user fields (left-outer-join semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationContext {
    pub reservation: Reservation,
    pub user: Option<User>,
}

/// Composite row returned by book-rooted reads:
/// the book's own fields plus, if a reservation exists, the reserving
/// user's fields and the reservation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub book: Book,
    pub held_by: Option<ReservationContext>,
}

impl BookDetail {
    /// Identifier of the reserving user, if any
    pub fn reserved_by(&self) -> Option<&str> {
        self.held_by
            .as_ref()
            .map(|ctx| ctx.reservation.user_id.as_str())
    }

    /// Date of the reservation, if any
    pub fn reserved_on(&self) -> Option<NaiveDate> {
        self.held_by.as_ref().map(|ctx| ctx.reservation.reserved_on)
    }
}

/// Composite row returned by `find_status`
///
/// The lookup may be rooted at any of the three entities, so every side is
/// optional: a user with no reservation yields a row with empty book and
/// reservation fields, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationStatus {
    pub book: Option<Book>,
    pub user: Option<User>,
    pub reservation: Option<Reservation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(
            BookStatus::from_str("available").unwrap(),
            BookStatus::Available
        );
        assert_eq!(
            BookStatus::from_str("RESERVED").unwrap(),
            BookStatus::Reserved
        );
        assert!(BookStatus::from_str("lost").is_err());
    }

    #[test]
    fn test_status_display_matches_stored_form() {
        assert_eq!(BookStatus::Available.to_string(), "Available");
        assert_eq!(BookStatus::Reserved.to_string(), "Reserved");
    }
}
