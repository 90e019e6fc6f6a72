#[path = "testutils/mod.rs"]
mod testutils;

use shelflite::BookStatus;
use testutils::test_fixture::TestFixture;

#[test]
fn test_add_then_detail_round_trip() {
    let fixture = TestFixture::new().expect("Failed to create fixture");

    let book = fixture
        .service
        .add_book("Dune", "Frank Herbert", "9780441172719", BookStatus::Available)
        .expect("Failed to add book");

    let detail = fixture
        .service
        .book_detail(book.id)
        .expect("Detail read failed")
        .expect("Book should exist");

    assert_eq!(detail.book.title, "Dune");
    assert_eq!(detail.book.author, "Frank Herbert");
    assert_eq!(detail.book.isbn, "9780441172719");
    assert_eq!(detail.book.status, BookStatus::Available);
    // No reservation yet: user fields are empty
    assert!(detail.held_by.is_none());
    assert_eq!(detail.reserved_by(), None);
}

#[test]
fn test_detail_of_unknown_book_is_none() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    assert!(fixture
        .service
        .book_detail(999)
        .expect("Detail read failed")
        .is_none());
}

#[test]
fn test_empty_catalog_lists_no_books() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let details = fixture.service.all_books().expect("Catalog scan failed");
    assert!(details.is_empty());
}

#[test]
fn test_list_is_ordered_by_book_id() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let ids = vec![
        fixture.add_available("First"),
        fixture.add_available("Second"),
        fixture.add_available("Third"),
    ];

    let listed: Vec<u64> = fixture
        .service
        .all_books()
        .expect("Catalog scan failed")
        .iter()
        .map(|d| d.book.id)
        .collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_book_ids_are_not_reused_after_delete() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let first = fixture.add_available("First");
    assert!(fixture.service.delete_book(first).expect("Delete failed"));

    let second = fixture.add_available("Second");
    assert!(second > first);
}

#[test]
fn test_update_overwrites_all_fields() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let id = fixture.add_available("Draft Title");

    let updated = fixture
        .service
        .update_book(id, "Dune", "Herbert", "000", BookStatus::Available)
        .expect("Update failed")
        .expect("Book should exist");

    assert_eq!(updated.title, "Dune");
    assert_eq!(updated.author, "Herbert");
    assert_eq!(updated.isbn, "000");
    assert_eq!(updated.status, BookStatus::Available);
}

#[test]
fn test_update_is_idempotent() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let id = fixture.add_available("Dune");

    let first = fixture
        .service
        .update_book(id, "Dune", "Herbert", "000", BookStatus::Available)
        .expect("Update failed");
    let second = fixture
        .service
        .update_book(id, "Dune", "Herbert", "000", BookStatus::Available)
        .expect("Update failed");

    assert_eq!(first, second);
    fixture.assert_consistent();
}

#[test]
fn test_update_of_unknown_book_is_none() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let result = fixture
        .service
        .update_book(42, "T", "A", "I", BookStatus::Available)
        .expect("Update failed");
    assert!(result.is_none());
}

#[test]
fn test_delete_is_idempotent() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let id = fixture.add_available("Ephemeral");

    assert!(fixture.service.delete_book(id).expect("Delete failed"));
    assert!(fixture.service.book_detail(id).expect("Detail failed").is_none());

    // Second delete is a no-op, not an error
    assert!(!fixture.service.delete_book(id).expect("Delete failed"));
    assert_eq!(fixture.service.book_count().expect("Count failed"), 0);
}

#[test]
fn test_duplicate_user_id_is_rejected() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    fixture
        .service
        .add_user("LU1", "Paul", "paul@example.com")
        .expect("Failed to add user");

    let duplicate = fixture.service.add_user("LU1", "Leto", "leto@example.com");
    assert!(matches!(
        duplicate,
        Err(shelflite::CatalogError::DuplicateKey(_))
    ));
}
