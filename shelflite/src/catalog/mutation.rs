// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Mutation coordinator for the reservation lifecycle
//!
//! The availability invariant - a book is `Reserved` exactly while a
//! reservation row references it - is enforced here and nowhere else.
//! Both the update path (status back to Available) and the delete path
//! route through `release_reservations`; placing a reservation flips the
//! book's status in the same call.

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::records::{BookId, BookStatus, Reservation};
use crate::catalog::store::CatalogStore;
use chrono::NaiveDate;
use log::{debug, info};
use std::sync::Arc;

#[derive(Clone)]
pub struct MutationCoordinator {
    store: Arc<CatalogStore>,
}

impl MutationCoordinator {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Delete every reservation referencing the given book
    ///
    /// Set-based and idempotent: releasing a book with no reservations is a
    /// no-op. Returns the number of rows removed (at most one in a
    /// consistent store).
    pub fn release_reservations(&self, book_id: BookId) -> CatalogResult<usize> {
        let held = self.store.reservations_for_book(book_id)?;
        for reservation in &held {
            self.store.remove_reservation(&reservation.id)?;
            debug!(
                "Released reservation {} on book {}",
                reservation.id, book_id
            );
        }
        Ok(held.len())
    }

    /// Place a reservation and mark the book as Reserved
    ///
    /// Fails with `DuplicateKey` when the ReservationID is already taken,
    /// with `UnknownBook` when the book row does not exist (a reservation
    /// must never reference a missing book), and with `AlreadyReserved`
    /// when another reservation holds the book; at most one reservation
    /// references a book at any time, and this is the only operation that
    /// produces them.
    pub fn reserve(
        &self,
        reservation_id: &str,
        book_id: BookId,
        user_id: &str,
        reserved_on: NaiveDate,
    ) -> CatalogResult<Reservation> {
        if self.store.has_reservation(reservation_id)? {
            return Err(CatalogError::DuplicateKey(reservation_id.to_string()));
        }
        let mut book = self
            .store
            .get_book(book_id)?
            .ok_or(CatalogError::UnknownBook(book_id))?;
        if self.store.reservation_for_book(book_id)?.is_some() {
            return Err(CatalogError::AlreadyReserved(book_id));
        }

        let reservation = Reservation {
            id: reservation_id.to_string(),
            book_id,
            user_id: user_id.to_string(),
            reserved_on,
        };
        self.store.put_reservation(&reservation)?;

        book.status = BookStatus::Reserved;
        self.store.put_book(&book)?;

        info!(
            "Reserved book {} for user {} ({})",
            book_id, user_id, reservation_id
        );
        Ok(reservation)
    }
}
