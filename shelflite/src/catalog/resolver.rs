// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Identifier classification and lookup dispatch
//!
//! Free-form identifiers are tagged by a closed two-letter prefix
//! convention: "LB" = BookID, "LU" = UserID, "LR" = ReservationID. Anything
//! that matches none of the prefixes is read as a Title literal. The
//! classification is a pure function producing a tagged variant which is
//! then matched exhaustively, so a change to the convention cannot silently
//! misroute a lookup.

use crate::catalog::error::CatalogResult;
use crate::catalog::records::{Book, BookId, Reservation, ReservationStatus};
use crate::catalog::store::CatalogStore;
use std::sync::Arc;

/// Identifier namespace prefixes
pub const BOOK_ID_PREFIX: &str = "LB";
pub const USER_ID_PREFIX: &str = "LU";
pub const RESERVATION_ID_PREFIX: &str = "LR";

/// Classified lookup identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    ByBookId(BookId),
    ByUserId(String),
    ByReservationId(String),
    ByTitle(String),
}

impl LookupKey {
    /// Classify a free-form identifier by its namespace prefix
    ///
    /// An "LB" prefix whose remainder is not a well-formed integer falls
    /// through to a Title literal; the prefix convention only claims
    /// numeric BookID suffixes.
    pub fn classify(identifier: &str) -> LookupKey {
        if let Some(rest) = identifier.strip_prefix(BOOK_ID_PREFIX) {
            if let Ok(id) = rest.parse::<BookId>() {
                return LookupKey::ByBookId(id);
            }
            return LookupKey::ByTitle(identifier.to_string());
        }
        if identifier.starts_with(USER_ID_PREFIX) {
            return LookupKey::ByUserId(identifier.to_string());
        }
        if identifier.starts_with(RESERVATION_ID_PREFIX) {
            return LookupKey::ByReservationId(identifier.to_string());
        }
        LookupKey::ByTitle(identifier.to_string())
    }
}

/// Cross-entity reservation lookup
///
/// Each branch is a left-outer join rooted at the classified entity, so an
/// entity with no counterpart on the other side still yields a row with
/// empty counterpart fields.
pub struct ReservationResolver {
    store: Arc<CatalogStore>,
}

impl ReservationResolver {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Four-way dispatch on the classified identifier
    ///
    /// Returns the first matching composite row, or `None` when nothing
    /// matches. A Title shared by several books resolves to the one with
    /// the lowest BookID (book scans are BookID-ordered).
    pub fn find_status(&self, identifier: &str) -> CatalogResult<Option<ReservationStatus>> {
        match LookupKey::classify(identifier) {
            LookupKey::ByBookId(id) => self.by_book_id(id),
            LookupKey::ByUserId(user_id) => self.by_user_id(&user_id),
            LookupKey::ByReservationId(reservation_id) => {
                self.by_reservation_id(&reservation_id)
            }
            LookupKey::ByTitle(title) => self.by_title(&title),
        }
    }

    /// Book -> Reservation -> User
    fn by_book_id(&self, id: BookId) -> CatalogResult<Option<ReservationStatus>> {
        match self.store.get_book(id)? {
            Some(book) => Ok(Some(self.book_rooted(book)?)),
            None => Ok(None),
        }
    }

    /// Book (by exact title) -> Reservation -> User
    fn by_title(&self, title: &str) -> CatalogResult<Option<ReservationStatus>> {
        match self.store.book_by_title(title)? {
            Some(book) => Ok(Some(self.book_rooted(book)?)),
            None => Ok(None),
        }
    }

    /// User -> Reservation -> Book
    fn by_user_id(&self, user_id: &str) -> CatalogResult<Option<ReservationStatus>> {
        let user = match self.store.get_user(user_id)? {
            Some(user) => user,
            None => return Ok(None),
        };
        let reservation = self.store.reservation_for_user(user_id)?;
        let book = match &reservation {
            Some(r) => self.store.get_book(r.book_id)?,
            None => None,
        };
        Ok(Some(ReservationStatus {
            book,
            user: Some(user),
            reservation,
        }))
    }

    /// Reservation -> Book, Reservation -> User
    fn by_reservation_id(&self, reservation_id: &str) -> CatalogResult<Option<ReservationStatus>> {
        let reservation = match self.store.get_reservation(reservation_id)? {
            Some(reservation) => reservation,
            None => return Ok(None),
        };
        let book = self.store.get_book(reservation.book_id)?;
        let user = self.store.get_user(&reservation.user_id)?;
        Ok(Some(ReservationStatus {
            book,
            user,
            reservation: Some(reservation),
        }))
    }

    fn book_rooted(&self, book: Book) -> CatalogResult<ReservationStatus> {
        let reservation: Option<Reservation> = self.store.reservation_for_book(book.id)?;
        let user = match &reservation {
            Some(r) => self.store.get_user(&r.user_id)?,
            None => None,
        };
        Ok(ReservationStatus {
            book: Some(book),
            user,
            reservation,
        })
    }
}
