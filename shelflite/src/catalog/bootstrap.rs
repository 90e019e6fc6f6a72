// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Guarded sample-data bootstrap
//!
//! Populates an empty catalog with synthetic books: sequential title
//! labels, an author drawn from a small fixed pool, a zero-padded
//! sequential ISBN suffix, status always Available. Guarded by a row-count
//! check so a second invocation against a populated store is a no-op
//! instead of appending duplicates.

use crate::catalog::error::CatalogResult;
use crate::catalog::records::BookStatus;
use crate::catalog::repository::CatalogRepository;
use log::info;

/// Default number of sample books
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Size of the fixed author pool
const AUTHOR_POOL: u32 = 20;

/// Insert `n` sample books into an empty catalog
///
/// Returns the number of books inserted: `n` on a fresh store, 0 when the
/// catalog already holds rows.
pub fn seed_sample_books(repository: &CatalogRepository, n: usize) -> CatalogResult<usize> {
    if repository.book_count()? > 0 {
        info!("Catalog already populated, skipping sample data");
        return Ok(0);
    }

    for i in 0..n {
        repository.add_book(
            &format!("Book Title {}", i),
            &format!("Author {}", fastrand::u32(1..=AUTHOR_POOL)),
            &format!("9780{:07}", i),
            BookStatus::Available,
        )?;
    }
    info!("Seeded {} sample books", n);
    Ok(n)
}
