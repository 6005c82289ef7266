use super::*;

#[test]
fn generate_id_has_prefix_and_nine_uppercase_base36_chars() {
    let id = generate_id();
    let fragment = id.strip_prefix("ID-").expect("prefix");
    assert_eq!(fragment.len(), 9);
    assert!(fragment.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
}

#[test]
fn generate_id_varies_between_calls() {
    let ids: std::collections::HashSet<_> = (0..64).map(|_| generate_id()).collect();
    assert!(ids.len() > 60);
}

#[test]
fn id_from_bits_is_base36_big_endian() {
    assert_eq!(id_from_bits("ID-", 0), "ID-000000000");
    assert_eq!(id_from_bits("ID-", 35), "ID-00000000Z");
    assert_eq!(id_from_bits("ID-", 36), "ID-000000010");
}

#[test]
fn generate_id_with_custom_prefix() {
    assert!(generate_id_with("BK-").starts_with("BK-"));
}
