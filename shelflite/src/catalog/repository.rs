// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog repository - book CRUD with joined reads
//!
//! Every read returns a composite row: the book's own fields plus, if a
//! reservation exists, the reserving user's fields and the reservation date
//! (left-outer join across Reservation and User, keyed on BookID). Absence
//! is always `Ok(None)` or an empty vec, never an error.

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::mutation::MutationCoordinator;
use crate::catalog::records::{
    Book, BookDetail, BookId, BookStatus, ReservationContext, User,
};
use crate::catalog::store::CatalogStore;
use log::{debug, info};
use std::sync::Arc;

pub struct CatalogRepository {
    store: Arc<CatalogStore>,
    mutations: MutationCoordinator,
}

impl CatalogRepository {
    pub fn new(store: Arc<CatalogStore>, mutations: MutationCoordinator) -> Self {
        Self { store, mutations }
    }

    /// Insert a new book under a freshly allocated BookID
    ///
    /// `DuplicateKey` only fires when the allocated id already has a row,
    /// which means a book was written under an out-of-band id past the
    /// persisted allocator.
    pub fn add_book(
        &self,
        title: &str,
        author: &str,
        isbn: &str,
        status: BookStatus,
    ) -> CatalogResult<Book> {
        let id = self.store.next_book_id()?;
        if self.store.has_book(id)? {
            return Err(CatalogError::DuplicateKey(format!("BookID {}", id)));
        }
        let book = Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status,
        };
        self.store.put_book(&book)?;
        info!("Added book {} ({})", id, title);
        Ok(book)
    }

    /// Joined read of a single book: Book -> Reservation -> User
    pub fn book_detail(&self, id: BookId) -> CatalogResult<Option<BookDetail>> {
        match self.store.get_book(id)? {
            Some(book) => Ok(Some(self.join(book)?)),
            None => Ok(None),
        }
    }

    /// Joined read of the whole catalog, in ascending BookID order
    ///
    /// An empty catalog yields an empty vec, not an error.
    pub fn all_books(&self) -> CatalogResult<Vec<BookDetail>> {
        let mut out = Vec::new();
        for book in self.store.books()? {
            out.push(self.join(book)?);
        }
        debug!("Catalog scan returned {} books", out.len());
        Ok(out)
    }

    /// Overwrite all four mutable fields of a book
    ///
    /// Setting the status to Available routes through the mutation
    /// coordinator and releases any reservation on the book. Returns the
    /// updated row, or `None` when no book has the given id. Idempotent for
    /// identical arguments.
    pub fn update_book(
        &self,
        id: BookId,
        title: &str,
        author: &str,
        isbn: &str,
        status: BookStatus,
    ) -> CatalogResult<Option<Book>> {
        if !self.store.has_book(id)? {
            return Ok(None);
        }
        // Cascade before the row write, so the reservation never outlives
        // the status change
        if status == BookStatus::Available {
            self.mutations.release_reservations(id)?;
        }
        let book = Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status,
        };
        self.store.put_book(&book)?;
        info!("Updated book {}", id);
        Ok(Some(book))
    }

    /// Remove a book and, first, any reservation referencing it
    ///
    /// Reservation rows must not outlive their referenced book, so the
    /// release runs before the row delete. Idempotent: a nonexistent id is
    /// a no-op returning `Ok(false)`.
    pub fn delete_book(&self, id: BookId) -> CatalogResult<bool> {
        if !self.store.has_book(id)? {
            return Ok(false);
        }
        self.mutations.release_reservations(id)?;
        self.store.remove_book(id)?;
        info!("Deleted book {}", id);
        Ok(true)
    }

    /// Load a user reference row
    ///
    /// Users are pre-existing reference data as far as the book lifecycle
    /// is concerned; this is the loader for that data.
    pub fn add_user(&self, id: &str, name: &str, email: &str) -> CatalogResult<User> {
        if self.store.has_user(id)? {
            return Err(CatalogError::DuplicateKey(id.to_string()));
        }
        let user = User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.store.put_user(&user)?;
        info!("Added user {}", id);
        Ok(user)
    }

    /// Number of books in the catalog
    pub fn book_count(&self) -> CatalogResult<usize> {
        self.store.book_count()
    }

    /// Assemble the composite row for one book
    ///
    /// If more than one reservation references the book (an integrity
    /// violation), only the lowest-keyed one is joined in - documented edge
    /// case, not a guarantee.
    fn join(&self, book: Book) -> CatalogResult<BookDetail> {
        let held_by = match self.store.reservation_for_book(book.id)? {
            Some(reservation) => {
                let user = self.store.get_user(&reservation.user_id)?;
                Some(ReservationContext { reservation, user })
            }
            None => None,
        };
        Ok(BookDetail { book, held_by })
    }
}
