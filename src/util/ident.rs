//! Short human-readable reference ids (`ID-K3F9Q2XZA`).
//!
//! Not unique in any strong sense; good enough to tag a client-side draft.

#[cfg(test)]
#[path = "ident_test.rs"]
mod ident_test;

use uuid::Uuid;

use crate::config::DEFAULT_ID_PREFIX;

const FRAGMENT_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[must_use]
pub fn generate_id() -> String {
    generate_id_with(DEFAULT_ID_PREFIX)
}

#[must_use]
pub fn generate_id_with(prefix: &str) -> String {
    id_from_bits(prefix, Uuid::new_v4().as_u128())
}

/// Prefix plus nine base-36 digits taken from the low end of `bits`.
#[must_use]
pub fn id_from_bits(prefix: &str, mut bits: u128) -> String {
    let mut fragment = [0u8; FRAGMENT_LEN];
    for slot in fragment.iter_mut().rev() {
        *slot = ALPHABET[(bits % 36) as usize];
        bits /= 36;
    }
    let mut id = String::with_capacity(prefix.len() + FRAGMENT_LEN);
    id.push_str(prefix);
    id.extend(fragment.iter().map(|&b| char::from(b)));
    id
}
