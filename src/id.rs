//! Record id generation.
//!
//! Ids are `base36(epoch millis)` followed by five random base36 characters.
//! There is no uniqueness check against existing records.

use chrono::Utc;
use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 5;

/// Generate a new record id from the current time and the thread-local RNG.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    generate_id_with(millis, &mut rand::rng())
}

/// Generate a record id from an explicit timestamp and random source.
pub fn generate_id_with<R: Rng>(millis: u64, rng: &mut R) -> String {
    let mut id = to_base36(millis);
    id.reserve(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        let idx = rng.random_range(0..ALPHABET.len());
        id.push(ALPHABET[idx] as char);
    }
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // digits come from ALPHABET, always ASCII
    digits.into_iter().map(char::from).collect()
}
