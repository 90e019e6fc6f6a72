//! Test fixture for ShelfLite integration tests
//!
//! Provides an isolated database instance per test using ONLY the public
//! LibraryService API.

use chrono::NaiveDate;
use shelflite::{BookStatus, LibraryService};

/// Test fixture with isolated database instance
pub struct TestFixture {
    pub service: LibraryService,
    _temp_dir: tempfile::TempDir,
}

impl TestFixture {
    /// Create a new fixture over a sled database in a temporary directory
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let db_path = temp_dir.path().join("shelflite_test");

        let service = LibraryService::open(db_path)?;

        Ok(TestFixture {
            service,
            _temp_dir: temp_dir,
        })
    }

    /// Add an available book, returning its BookID
    pub fn add_available(&self, title: &str) -> u64 {
        self.service
            .add_book(title, "Test Author", "9780000000000", BookStatus::Available)
            .expect("Failed to add book")
            .id
    }

    /// Add a user and a reservation holding the given book
    pub fn reserve(&self, reservation_id: &str, book_id: u64, user_id: &str) {
        if self.service.find_status(user_id).expect("lookup failed").is_none() {
            self.service
                .add_user(user_id, "Test User", "user@example.com")
                .expect("Failed to add user");
        }
        self.service
            .reserve(reservation_id, book_id, user_id, test_date())
            .expect("Failed to place reservation");
    }

    /// Check the availability invariant over the whole catalog:
    /// a book is Reserved exactly when a reservation row references it
    pub fn assert_consistent(&self) {
        for detail in self.service.all_books().expect("catalog scan failed") {
            let reserved = detail.book.status == BookStatus::Reserved;
            assert_eq!(
                reserved,
                detail.held_by.is_some(),
                "invariant violated for book {} ({}): status {} with reservation {:?}",
                detail.book.id,
                detail.book.title,
                detail.book.status,
                detail.held_by.map(|ctx| ctx.reservation.id),
            );
        }
    }
}

/// Fixed reservation date used across tests
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}
