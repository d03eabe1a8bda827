//! Case folded word frequencies.

use std::collections::HashMap;

/// Counts how often each word occurs, case-insensitively.
///
/// Keys are lowercased, so "Love", "love" and "LOVE" all land on the same
/// entry. Asking for a word that never occurred is a lookup miss, not a zero
/// count.
pub fn count_words<S: AsRef<str>>(words: &[S]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for word in words {
        *counts.entry(word.as_ref().to_lowercase()).or_insert(0) += 1;
    }
    counts
}
