//! Test utilities for ShelfLite integration tests
//!
//! Provides isolated service instances over temporary directories.
//! Tests must not access internal components - use only the public
//! LibraryService API.

pub mod test_fixture;
