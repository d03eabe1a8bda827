//! Content hash used to spot the same lyrics hiding under different titles.

/// Polynomial rolling hash (`h = 31 * h + unit`) over the UTF-16 code units
/// of the text, with wrapping signed 32 bit arithmetic.
///
/// Equal texts always collide and the value is stable across platforms, so
/// hashes can be compared between runs. The hash is taken over the raw text,
/// credits block included.
pub fn lyric_hash(text: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash
}
