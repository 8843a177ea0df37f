/// Hash a seed string down to a 32-bit signed integer.
///
/// Starts from a fixed accumulator and folds in each UTF-16 code unit with a
/// shift-and-xor step. Arithmetic wraps at 32 bits, so long inputs overflow
/// by truncation and the result can be negative; callers take the absolute
/// value before reducing it modulo the word-list length. Total over all
/// strings, including the empty one.
pub fn seed_hash(seed: &str) -> i32 {
    let mut n: i32 = 12345;
    for unit in seed.encode_utf16() {
        n = n.wrapping_shl(4) ^ i32::from(unit);
    }
    n
}
