#[path = "testutils/mod.rs"]
mod testutils;

use shelflite::BookStatus;
use testutils::test_fixture::TestFixture;

#[test]
fn test_seed_populates_fresh_store() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let inserted = fixture
        .service
        .seed_sample_books(50)
        .expect("Seeding failed");
    assert_eq!(inserted, 50);
    assert_eq!(fixture.service.book_count().expect("Count failed"), 50);

    // Every sample book starts out available
    for detail in fixture.service.all_books().expect("Scan failed") {
        assert_eq!(detail.book.status, BookStatus::Available);
        assert!(detail.held_by.is_none());
    }
}

#[test]
fn test_seed_against_populated_store_is_a_no_op() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    fixture.service.seed_sample_books(10).expect("Seeding failed");

    let reseeded = fixture
        .service
        .seed_sample_books(10)
        .expect("Seeding failed");
    assert_eq!(reseeded, 0);
    assert_eq!(fixture.service.book_count().expect("Count failed"), 10);
}

#[test]
fn test_seeded_books_are_fully_usable() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    fixture.service.seed_sample_books(5).expect("Seeding failed");

    // Sample rows go through the same lifecycle as any other book
    fixture.reserve("LR1", 3, "LU1");
    fixture.assert_consistent();

    assert!(fixture.service.delete_book(3).expect("Delete failed"));
    fixture.assert_consistent();
    assert_eq!(fixture.service.book_count().expect("Count failed"), 4);
}
