use serde::Deserialize;
use serde_json::json;

use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct BookingDraft {
    pickup: String,
    drop: String,
    passengers: u8,
    notes: Option<String>,
}

fn store() -> JsonStore<MemoryStore> {
    JsonStore::new(MemoryStore::new())
}

#[test]
fn round_trips_structs() {
    let store = store();
    let draft = BookingDraft {
        pickup: "Andheri".into(),
        drop: "Colaba".into(),
        passengers: 3,
        notes: None,
    };
    store.save("booking-draft", &draft).unwrap();
    assert_eq!(store.load::<BookingDraft>("booking-draft").unwrap(), Some(draft));
}

#[test]
fn round_trips_arbitrary_json_values() {
    let store = store();
    for value in [
        json!(null),
        json!(true),
        json!(0),
        json!(-12.5),
        json!("text with \"quotes\""),
        json!([1, "two", {"three": 3}]),
        json!({"nested": {"list": [], "empty": {}}}),
    ] {
        store.save("k", &value).unwrap();
        assert_eq!(store.load::<serde_json::Value>("k").unwrap(), Some(value));
    }
}

#[test]
fn remove_then_load_is_none() {
    let store = store();
    store.save("theme", "dark").unwrap();
    store.remove("theme").unwrap();
    assert_eq!(store.load::<String>("theme").unwrap(), None);
    assert!(store.inner().is_empty());
}

#[test]
fn missing_key_is_none() {
    assert_eq!(store().load::<u32>("nothing").unwrap(), None);
}

#[test]
fn empty_raw_value_is_none() {
    let store = store();
    store.inner().set_item("blank", "").unwrap();
    assert_eq!(store.load::<String>("blank").unwrap(), None);
}

#[test]
fn malformed_raw_value_is_decode_error() {
    let store = store();
    store.inner().set_item("broken", "{not json").unwrap();
    let err = store.load::<serde_json::Value>("broken").unwrap_err();
    assert!(matches!(err, StorageError::Decode { ref key, .. } if key == "broken"));
}

#[test]
fn type_mismatch_is_decode_error() {
    let store = store();
    store.save("count", &"three").unwrap();
    assert!(matches!(store.load::<u32>("count"), Err(StorageError::Decode { .. })));
}

#[test]
fn remove_missing_key_is_ok() {
    assert!(store().remove("never-set").is_ok());
}

#[test]
fn values_are_stored_as_json_text() {
    let store = store();
    store.save("fare", &450.5).unwrap();
    assert_eq!(store.inner().get_item("fare").unwrap().as_deref(), Some("450.5"));
}
