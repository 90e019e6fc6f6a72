// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Typed catalog store - bridges record structures and the storage driver
//!
//! This module organizes catalog data into four trees and handles
//! serialization/deserialization, working with any StorageDriver
//! implementation:
//!
//! - `books` - Book rows keyed by big-endian BookID (scans are BookID-ordered)
//! - `users` - User rows keyed by UserID
//! - `reservations` - Reservation rows keyed by ReservationID
//! - `meta` - the persisted BookID allocator

use crate::catalog::error::CatalogResult;
use crate::catalog::records::{Book, BookId, Reservation, User};
use crate::storage::{StorageDriver, StorageTree};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Tree names pre-created at service startup
pub const BOOKS_TREE: &str = "books";
pub const USERS_TREE: &str = "users";
pub const RESERVATIONS_TREE: &str = "reservations";
pub const META_TREE: &str = "meta";

/// Meta key holding the next BookID to hand out
const NEXT_BOOK_ID_KEY: &[u8] = b"next_book_id";

/// Typed layer over the catalog trees
///
/// Owns one tree handle per entity for the lifetime of the service. All
/// record encoding goes through bincode; key encoding is the identifier
/// itself (big-endian u64 for books, UTF-8 string for users/reservations).
pub struct CatalogStore {
    books: Box<dyn StorageTree>,
    users: Box<dyn StorageTree>,
    reservations: Box<dyn StorageTree>,
    meta: Box<dyn StorageTree>,
}

fn encode<T: Serialize>(record: &T) -> CatalogResult<Vec<u8>> {
    Ok(bincode::serialize(record)?)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> CatalogResult<T> {
    Ok(bincode::deserialize(bytes)?)
}

impl CatalogStore {
    /// Open the catalog trees on the given driver
    pub fn open(
        driver: &dyn StorageDriver<Tree = Box<dyn StorageTree>>,
    ) -> CatalogResult<Self> {
        Ok(Self {
            books: driver.open_tree(BOOKS_TREE)?,
            users: driver.open_tree(USERS_TREE)?,
            reservations: driver.open_tree(RESERVATIONS_TREE)?,
            meta: driver.open_tree(META_TREE)?,
        })
    }

    /// Big-endian key for a BookID, so lexicographic tree order is numeric order
    pub fn book_key(id: BookId) -> [u8; 8] {
        id.to_be_bytes()
    }

    /// Allocate the next BookID and persist the advanced counter
    ///
    /// IDs start at 1 and are never reused, even after deletions.
    pub fn next_book_id(&self) -> CatalogResult<BookId> {
        let next = match self.meta.get(NEXT_BOOK_ID_KEY)? {
            Some(bytes) => {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(&bytes[..8]);
                u64::from_be_bytes(buf)
            }
            None => 1,
        };
        self.meta
            .insert(NEXT_BOOK_ID_KEY, &(next + 1).to_be_bytes())?;
        Ok(next)
    }

    // ---- books ----

    pub fn put_book(&self, book: &Book) -> CatalogResult<()> {
        self.books.insert(&Self::book_key(book.id), &encode(book)?)?;
        Ok(())
    }

    pub fn get_book(&self, id: BookId) -> CatalogResult<Option<Book>> {
        match self.books.get(&Self::book_key(id))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn has_book(&self, id: BookId) -> CatalogResult<bool> {
        Ok(self.books.contains_key(&Self::book_key(id))?)
    }

    pub fn remove_book(&self, id: BookId) -> CatalogResult<()> {
        self.books.remove(&Self::book_key(id))?;
        Ok(())
    }

    pub fn book_count(&self) -> CatalogResult<usize> {
        Ok(self.books.len()?)
    }

    /// All books in ascending BookID order
    pub fn books(&self) -> CatalogResult<Vec<Book>> {
        let mut out = Vec::new();
        for entry in self.books.iter()? {
            let (_, bytes) = entry?;
            out.push(decode(&bytes)?);
        }
        Ok(out)
    }

    /// First book (lowest BookID) with the given title, exact match
    pub fn book_by_title(&self, title: &str) -> CatalogResult<Option<Book>> {
        for entry in self.books.iter()? {
            let (_, bytes) = entry?;
            let book: Book = decode(&bytes)?;
            if book.title == title {
                return Ok(Some(book));
            }
        }
        Ok(None)
    }

    // ---- users ----

    pub fn put_user(&self, user: &User) -> CatalogResult<()> {
        self.users.insert(user.id.as_bytes(), &encode(user)?)?;
        Ok(())
    }

    pub fn get_user(&self, id: &str) -> CatalogResult<Option<User>> {
        match self.users.get(id.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn has_user(&self, id: &str) -> CatalogResult<bool> {
        Ok(self.users.contains_key(id.as_bytes())?)
    }

    // ---- reservations ----

    pub fn put_reservation(&self, reservation: &Reservation) -> CatalogResult<()> {
        self.reservations
            .insert(reservation.id.as_bytes(), &encode(reservation)?)?;
        Ok(())
    }

    pub fn get_reservation(&self, id: &str) -> CatalogResult<Option<Reservation>> {
        match self.reservations.get(id.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn has_reservation(&self, id: &str) -> CatalogResult<bool> {
        Ok(self.reservations.contains_key(id.as_bytes())?)
    }

    pub fn remove_reservation(&self, id: &str) -> CatalogResult<()> {
        self.reservations.remove(id.as_bytes())?;
        Ok(())
    }

    /// Every reservation referencing the given book, in key order
    ///
    /// A consistent store holds at most one; the plural return exists so the
    /// release path can repair an inconsistent store with a set-based delete.
    pub fn reservations_for_book(&self, book_id: BookId) -> CatalogResult<Vec<Reservation>> {
        let mut out = Vec::new();
        for entry in self.reservations.iter()? {
            let (_, bytes) = entry?;
            let reservation: Reservation = decode(&bytes)?;
            if reservation.book_id == book_id {
                out.push(reservation);
            }
        }
        Ok(out)
    }

    /// First reservation referencing the given book, if any
    pub fn reservation_for_book(&self, book_id: BookId) -> CatalogResult<Option<Reservation>> {
        Ok(self.reservations_for_book(book_id)?.into_iter().next())
    }

    /// First reservation held by the given user, if any
    pub fn reservation_for_user(&self, user_id: &str) -> CatalogResult<Option<Reservation>> {
        for entry in self.reservations.iter()? {
            let (_, bytes) = entry?;
            let reservation: Reservation = decode(&bytes)?;
            if reservation.user_id == user_id {
                return Ok(Some(reservation));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::records::BookStatus;
    use crate::storage::persistent::memory::MemoryStorageDriver;

    fn memory_store() -> CatalogStore {
        let driver = MemoryStorageDriver::new();
        CatalogStore::open(&driver).unwrap()
    }

    fn book(id: BookId, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Author".to_string(),
            isbn: "9780000000000".to_string(),
            status: BookStatus::Available,
        }
    }

    #[test]
    fn test_book_ids_are_monotonic_and_never_reused() {
        let store = memory_store();
        assert_eq!(store.next_book_id().unwrap(), 1);
        assert_eq!(store.next_book_id().unwrap(), 2);

        // Deleting a book does not roll the allocator back
        store.put_book(&book(2, "B")).unwrap();
        store.remove_book(2).unwrap();
        assert_eq!(store.next_book_id().unwrap(), 3);
    }

    #[test]
    fn test_books_scan_in_id_order() {
        let store = memory_store();
        for id in [30u64, 2, 17] {
            store.put_book(&book(id, "T")).unwrap();
        }
        let ids: Vec<BookId> = store.books().unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 17, 30]);
    }

    #[test]
    fn test_book_round_trip() {
        let store = memory_store();
        let original = book(9, "Dune");
        store.put_book(&original).unwrap();
        assert_eq!(store.get_book(9).unwrap(), Some(original));
        assert_eq!(store.get_book(10).unwrap(), None);
    }

    #[test]
    fn test_title_match_returns_lowest_book_id() {
        let store = memory_store();
        store.put_book(&book(5, "Dune")).unwrap();
        store.put_book(&book(2, "Dune")).unwrap();
        let found = store.book_by_title("Dune").unwrap().unwrap();
        assert_eq!(found.id, 2);
    }
}
