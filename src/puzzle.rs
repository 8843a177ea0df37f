use rand::Rng;

use crate::hash::seed_hash;

/// Number of characters in a generated seed.
pub const SEED_LENGTH: usize = 6;

const HEX_DIGITS: &[u8] = b"0123456789abcdef";

/// Index of the target word for `seed` in a list of `list_len` words.
///
/// Same seed and same list length always give the same index. `list_len`
/// must be non-zero; game construction rejects an empty list before any
/// index is computed.
pub fn word_index(seed: &str, list_len: usize) -> usize {
    debug_assert!(list_len > 0, "word list must be non-empty");
    seed_hash(seed).unsigned_abs() as usize % list_len
}

/// Generate a fresh seed: six characters drawn uniformly from `0-9a-f`.
pub fn random_seed() -> String {
    let mut rng = rand::rng();
    (0..SEED_LENGTH)
        .map(|_| HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char)
        .collect()
}
