use dialkeep_store::error::{StoreError, StoreErrorKind};
use dialkeep_store::repo::ContactNew;
use dialkeep_store::Store;

#[test]
fn contact_crud_roundtrip() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let contact = store
        .contacts()
        .create(
            now,
            ContactNew {
                display_name: "Ada Lovelace".to_string(),
                phone: Some("415-555-1212".to_string()),
            },
        )
        .expect("create contact");

    let fetched = store
        .contacts()
        .get(contact.id)
        .expect("get contact")
        .expect("contact exists");
    assert_eq!(fetched.display_name, "Ada Lovelace");
    assert_eq!(fetched.phone.as_deref(), Some("415-555-1212"));

    store.contacts().delete(contact.id).expect("delete contact");
    let missing = store.contacts().get(contact.id).expect("get contact");
    assert!(missing.is_none());
}

#[test]
fn create_rejects_blank_display_name() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let err = store
        .contacts()
        .create(
            1_700_000_000,
            ContactNew {
                display_name: "   ".to_string(),
                phone: None,
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Core);
}

#[test]
fn list_phone_records_includes_empty_phones() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let with_phone = store
        .contacts()
        .create(
            now,
            ContactNew {
                display_name: "Grace Hopper".to_string(),
                phone: Some("(415) 555-0000".to_string()),
            },
        )
        .expect("create contact");
    let without_phone = store
        .contacts()
        .create(
            now,
            ContactNew {
                display_name: "Alan Turing".to_string(),
                phone: None,
            },
        )
        .expect("create contact");

    let records = store
        .contacts()
        .list_phone_records()
        .expect("list phone records");
    assert_eq!(records.len(), 2);

    let phones: Vec<_> = records
        .iter()
        .map(|record| (record.id, record.phone.clone()))
        .collect();
    assert!(phones.contains(&(with_phone.id, Some("(415) 555-0000".to_string()))));
    assert!(phones.contains(&(without_phone.id, None)));
}

#[test]
fn update_phone_persists_and_bumps_updated_at() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let now = 1_700_000_000;
    let contact = store
        .contacts()
        .create(
            now,
            ContactNew {
                display_name: "Ada Lovelace".to_string(),
                phone: Some("4155551212".to_string()),
            },
        )
        .expect("create contact");

    store
        .contacts()
        .update_phone(now + 60, contact.id, "(415) 555-1212")
        .expect("update phone");

    let fetched = store
        .contacts()
        .get(contact.id)
        .expect("get contact")
        .expect("contact exists");
    assert_eq!(fetched.phone.as_deref(), Some("(415) 555-1212"));
    assert_eq!(fetched.updated_at, now + 60);
}

#[test]
fn update_phone_for_missing_contact_is_not_found() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let id = dialkeep_core::domain::ContactId::new();
    let err = store
        .contacts()
        .update_phone(1_700_000_000, id, "(415) 555-1212")
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}
