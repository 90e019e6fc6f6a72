#[path = "testutils/mod.rs"]
mod testutils;

use shelflite::BookStatus;
use testutils::test_fixture::TestFixture;

#[test]
fn test_lb_identifier_looks_up_by_book_id() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    // Allocate ids 1..=7
    for i in 1..=7 {
        fixture.add_available(&format!("Book {}", i));
    }

    let status = fixture
        .service
        .find_status("LB7")
        .expect("Lookup failed")
        .expect("Book 7 should match");
    assert_eq!(status.book.expect("Book side should be set").id, 7);
    assert!(status.reservation.is_none());
}

#[test]
fn test_lu_identifier_looks_up_by_user_id() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let id = fixture.add_available("Dune");
    fixture.reserve("LR1", id, "LU42");

    let status = fixture
        .service
        .find_status("LU42")
        .expect("Lookup failed")
        .expect("User should match");
    assert_eq!(status.user.expect("User side should be set").id, "LU42");
    assert_eq!(status.book.expect("Book side should be set").id, id);
    assert_eq!(
        status.reservation.expect("Reservation side should be set").id,
        "LR1"
    );
}

#[test]
fn test_user_without_reservation_yields_empty_book_fields() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    fixture
        .service
        .add_user("LU7", "Idle Reader", "idle@example.com")
        .expect("Failed to add user");

    let status = fixture
        .service
        .find_status("LU7")
        .expect("Lookup failed")
        .expect("User should match");
    assert!(status.user.is_some());
    assert!(status.book.is_none());
    assert!(status.reservation.is_none());
}

#[test]
fn test_lr_identifier_looks_up_by_reservation_id() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let id = fixture.add_available("Dune");
    fixture.reserve("LR9", id, "LU1");

    let status = fixture
        .service
        .find_status("LR9")
        .expect("Lookup failed")
        .expect("Reservation should match");
    assert_eq!(
        status.reservation.expect("Reservation side should be set").id,
        "LR9"
    );
    assert_eq!(
        status.book.expect("Book side should be set").status,
        BookStatus::Reserved
    );
    assert_eq!(status.user.expect("User side should be set").id, "LU1");
}

#[test]
fn test_unprefixed_identifier_falls_through_to_title() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let id = fixture.add_available("Dune");

    let status = fixture
        .service
        .find_status("Dune")
        .expect("Lookup failed")
        .expect("Title should match");
    assert_eq!(status.book.expect("Book side should be set").id, id);
}

#[test]
fn test_shared_title_resolves_to_lowest_book_id() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let first = fixture.add_available("Dune");
    let _second = fixture.add_available("Dune");

    let status = fixture
        .service
        .find_status("Dune")
        .expect("Lookup failed")
        .expect("Title should match");
    assert_eq!(status.book.expect("Book side should be set").id, first);
}

#[test]
fn test_unknown_identifier_is_none() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    fixture.add_available("Dune");

    assert!(fixture
        .service
        .find_status("LB999")
        .expect("Lookup failed")
        .is_none());
    assert!(fixture
        .service
        .find_status("LU999")
        .expect("Lookup failed")
        .is_none());
    assert!(fixture
        .service
        .find_status("LR999")
        .expect("Lookup failed")
        .is_none());
    assert!(fixture
        .service
        .find_status("No Such Title")
        .expect("Lookup failed")
        .is_none());
}
