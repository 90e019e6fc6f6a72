// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! LibraryService - the public entry point
//!
//! Owns one storage driver for its entire lifetime (opened at construction,
//! flushed and released on `shutdown`) and exposes the command surface 1:1:
//! add/detail/status/list/update/delete plus the user/reservation loaders
//! and the guarded sample-data bootstrap. Execution is synchronous, one
//! operation at a time; there is no internal queuing, pooling, retrying,
//! or store-level transaction - multi-statement sequences are atomic only
//! because exactly one operation is in flight per service.

use crate::catalog::bootstrap;
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::mutation::MutationCoordinator;
use crate::catalog::records::{
    Book, BookDetail, BookId, BookStatus, Reservation, ReservationStatus, User,
};
use crate::catalog::repository::CatalogRepository;
use crate::catalog::resolver::ReservationResolver;
use crate::catalog::store::CatalogStore;
use crate::storage::{create_storage_driver, StorageDriver, StorageTree, StorageType};
use chrono::NaiveDate;
use log::info;
use std::path::Path;
use std::sync::Arc;

pub struct LibraryService {
    // Kept for the lifetime of the service; shutdown() is the only place
    // that releases it
    driver: Box<dyn StorageDriver<Tree = Box<dyn StorageTree>>>,
    repository: CatalogRepository,
    resolver: ReservationResolver,
    mutations: MutationCoordinator,
}

impl LibraryService {
    /// Open a service over the default backend at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        Self::with_storage(StorageType::default(), path)
    }

    /// Open a service over a non-persistent in-memory backend
    pub fn in_memory() -> CatalogResult<Self> {
        Self::with_storage(StorageType::Memory, "shelflite-memory")
    }

    /// Open a service over an explicit backend
    pub fn with_storage<P: AsRef<Path>>(
        storage_type: StorageType,
        path: P,
    ) -> CatalogResult<Self> {
        info!(
            "Opening library service with {} storage at {:?}",
            storage_type,
            path.as_ref()
        );
        let driver = create_storage_driver(storage_type, path).map_err(CatalogError::from)?;
        let store = Arc::new(CatalogStore::open(driver.as_ref())?);
        let mutations = MutationCoordinator::new(store.clone());
        let repository = CatalogRepository::new(store.clone(), mutations.clone());
        let resolver = ReservationResolver::new(store);
        Ok(Self {
            driver,
            repository,
            resolver,
            mutations,
        })
    }

    // ---- command surface ----

    /// Add a new book; the store assigns the BookID
    pub fn add_book(
        &self,
        title: &str,
        author: &str,
        isbn: &str,
        status: BookStatus,
    ) -> CatalogResult<Book> {
        self.repository.add_book(title, author, isbn, status)
    }

    /// Joined read of one book, `None` when the id is unknown
    pub fn book_detail(&self, id: BookId) -> CatalogResult<Option<BookDetail>> {
        self.repository.book_detail(id)
    }

    /// Classify the identifier and look up the matching reservation status
    pub fn find_status(&self, identifier: &str) -> CatalogResult<Option<ReservationStatus>> {
        self.resolver.find_status(identifier)
    }

    /// Joined read of the whole catalog
    pub fn all_books(&self) -> CatalogResult<Vec<BookDetail>> {
        self.repository.all_books()
    }

    /// Overwrite a book's fields; status Available releases its reservation
    pub fn update_book(
        &self,
        id: BookId,
        title: &str,
        author: &str,
        isbn: &str,
        status: BookStatus,
    ) -> CatalogResult<Option<Book>> {
        self.repository.update_book(id, title, author, isbn, status)
    }

    /// Delete a book after releasing its reservations
    pub fn delete_book(&self, id: BookId) -> CatalogResult<bool> {
        self.repository.delete_book(id)
    }

    /// Load a user reference row
    pub fn add_user(&self, id: &str, name: &str, email: &str) -> CatalogResult<User> {
        self.repository.add_user(id, name, email)
    }

    /// Place a reservation, marking the book Reserved
    pub fn reserve(
        &self,
        reservation_id: &str,
        book_id: BookId,
        user_id: &str,
        reserved_on: NaiveDate,
    ) -> CatalogResult<Reservation> {
        self.mutations.reserve(reservation_id, book_id, user_id, reserved_on)
    }

    /// Populate an empty catalog with sample books
    pub fn seed_sample_books(&self, n: usize) -> CatalogResult<usize> {
        bootstrap::seed_sample_books(&self.repository, n)
    }

    /// Number of books in the catalog
    pub fn book_count(&self) -> CatalogResult<usize> {
        self.repository.book_count()
    }

    /// Flush pending writes and release the store session
    pub fn shutdown(mut self) -> CatalogResult<()> {
        info!("Shutting down library service");
        self.driver.shutdown().map_err(CatalogError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The full reservation lifecycle against the in-memory backend:
    // add, reserve, release via update, observe the joined rows change
    #[test]
    fn test_reservation_lifecycle_in_memory() {
        let service = LibraryService::in_memory().unwrap();

        let book = service
            .add_book("Dune", "Frank Herbert", "9780441172719", BookStatus::Available)
            .unwrap();
        let detail = service.book_detail(book.id).unwrap().unwrap();
        assert_eq!(detail.book.status, BookStatus::Available);
        assert!(detail.held_by.is_none());

        service.add_user("LU1", "Paul", "paul@example.com").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        service.reserve("LR1", book.id, "LU1", date).unwrap();

        let detail = service.book_detail(book.id).unwrap().unwrap();
        assert_eq!(detail.book.status, BookStatus::Reserved);
        assert_eq!(detail.reserved_by(), Some("LU1"));
        assert_eq!(detail.reserved_on(), Some(date));

        service
            .update_book(book.id, "Dune", "Herbert", "000", BookStatus::Available)
            .unwrap()
            .unwrap();
        let detail = service.book_detail(book.id).unwrap().unwrap();
        assert_eq!(detail.book.status, BookStatus::Available);
        assert!(detail.held_by.is_none());

        service.shutdown().unwrap();
    }
}
