// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! ShelfLite - An embedded library catalog and reservation store
//!
//! ShelfLite manages a catalog of books together with the reservations that
//! hold them, on top of an embedded key-value backend.
//!
//! # Features
//!
//! - **Catalog CRUD**: Create, read, update, and delete book records
//! - **Joined Reads**: Every read returns the book together with its
//!   reserving user and reservation date (left-outer-join semantics)
//! - **Identifier Dispatch**: One lookup entry point that classifies
//!   free-form identifiers ("LB" = book, "LU" = user, "LR" = reservation,
//!   anything else = title) and dispatches accordingly
//! - **Availability Invariant**: A book is `Reserved` exactly while a
//!   reservation row references it; releasing or deleting a book removes
//!   its reservations in referential order
//! - **Embedded Database**: Uses Sled for embedded, serverless storage,
//!   with an in-memory driver for tests
//!
//! # Usage
//!
//! ```ignore
//! use shelflite::{BookStatus, LibraryService};
//!
//! let service = LibraryService::open("./library-db")?;
//! service.seed_sample_books(50)?;
//! let book = service.add_book("Dune", "Frank Herbert", "9780441172719", BookStatus::Available)?;
//! let detail = service.book_detail(book.id)?;
//! service.shutdown()?;
//! ```

// Public modules - exposed to external users
pub mod service;

// Internal modules - only visible within shelflite crate
pub(crate) mod catalog;
pub(crate) mod storage;

// Re-export the public API - LibraryService is the only entry point
pub use service::LibraryService;

// Re-export record and result types (needed for inspecting returned rows)
pub use catalog::bootstrap::DEFAULT_SAMPLE_SIZE;
pub use catalog::error::{CatalogError, CatalogResult};
pub use catalog::records::{
    Book, BookDetail, BookId, BookStatus, Reservation, ReservationContext, ReservationStatus,
    User,
};
pub use catalog::resolver::LookupKey;
pub use storage::StorageType;

/// ShelfLite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ShelfLite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
