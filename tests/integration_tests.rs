//! End-to-end scenario tests for dialdex

use dialdex::{Contact, ContactStore};
use tempfile::TempDir;

// =============================================================================
// End-to-End Scenario
// =============================================================================

#[test]
fn test_address_book_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("address_book.dat");

    let store = ContactStore::open_path(&log_path).unwrap();

    let avinash = Contact::new("Avinash", "test", "Bengaluru", "9676806379");
    let other = Contact::new("first", "last", "test address ", "1234567890");

    store.add(&avinash).unwrap();
    store.add(&other).unwrap();

    // Phone lookup returns the matching contact
    let by_phone = store.search_by_phone("9676806379").unwrap().unwrap();
    assert_eq!(by_phone, avinash);

    // Name lookup is lowercase-consistent
    let by_name = store.search_by_name("avinash test").unwrap().unwrap();
    assert_eq!(by_name, avinash);

    // Unknown phone number is a miss, not an error
    assert!(store.search_by_phone("000").unwrap().is_none());

    store.close().unwrap();
}

#[test]
fn test_scenario_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("address_book.dat");

    {
        let store = ContactStore::open_path(&log_path).unwrap();
        store
            .add(&Contact::new("Avinash", "test", "Bengaluru", "9676806379"))
            .unwrap();
        store
            .add(&Contact::new("first", "last", "test address ", "1234567890"))
            .unwrap();
        store.close().unwrap();
    }

    // A second run rebuilds the indexes from the log and serves the same
    // lookups.
    let store = ContactStore::open_path(&log_path).unwrap();

    let by_phone = store.search_by_phone("1234567890").unwrap().unwrap();
    assert_eq!(by_phone.first_name, "first");
    assert_eq!(by_phone.address, "test address ");

    let by_name = store.search_by_name("Avinash Test").unwrap().unwrap();
    assert_eq!(by_name.phone_number, "9676806379");

    store.close().unwrap();
}
