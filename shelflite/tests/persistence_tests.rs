use shelflite::{BookStatus, LibraryService};

#[test]
fn test_catalog_survives_shutdown_and_reopen() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("shelflite_test");

    let first_id = {
        let service = LibraryService::open(&db_path).expect("Failed to open service");
        let book = service
            .add_book("Dune", "Frank Herbert", "9780441172719", BookStatus::Available)
            .expect("Failed to add book");
        service.shutdown().expect("Shutdown failed");
        book.id
    };

    let service = LibraryService::open(&db_path).expect("Failed to reopen service");
    let detail = service
        .book_detail(first_id)
        .expect("Detail failed")
        .expect("Book should survive reopen");
    assert_eq!(detail.book.title, "Dune");

    // The id allocator picks up where it left off
    let next = service
        .add_book("Hyperion", "Dan Simmons", "9780553283686", BookStatus::Available)
        .expect("Failed to add book");
    assert!(next.id > first_id);

    service.shutdown().expect("Shutdown failed");
}
