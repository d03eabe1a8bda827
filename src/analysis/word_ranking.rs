//! Selection of the most common and the rarest words from an aggregate count.

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many words each ranked list holds when enough are available.
pub const RANKED_LIST_LEN: usize = 10;

/// A word together with how many times it was seen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordTally {
    pub word: String,
    pub count: u32,
}

impl WordTally {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// The two ranked lists derived from an aggregate word count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordRanking {
    pub common: Vec<WordTally>,
    pub unique: Vec<WordTally>,
}

/// Ranks `counts` into the most common words and a sample of the rarest ones.
///
/// The common list is fully deterministic: descending count, ties broken
/// alphabetically. The unique list prefers words seen exactly once; when more
/// of those exist than fit, a random sample is drawn with `rng`, and when too
/// few exist the tail of the count ordering is used instead. Vocabularies
/// smaller than both lists combined are split between them, with the unique
/// list taking the smaller half.
pub fn rank_words(counts: &HashMap<String, u32>, rng: &mut dyn RngCore) -> WordRanking {
    let mut by_count: Vec<WordTally> = counts
        .iter()
        .map(|(word, count)| WordTally::new(word.clone(), *count))
        .collect();
    by_count.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    let mut common_len = RANKED_LIST_LEN;
    let mut unique_len = RANKED_LIST_LEN;
    if by_count.len() < common_len + unique_len {
        unique_len = by_count.len() / 2;
        common_len = by_count.len() - unique_len;
    }

    let mut singletons: Vec<WordTally> = by_count
        .iter()
        .filter(|tally| tally.count == 1)
        .cloned()
        .collect();

    let unique = if singletons.len() < unique_len {
        // Not enough words seen exactly once, take the rarest overall.
        by_count[by_count.len() - unique_len..].to_vec()
    } else {
        singletons.shuffle(rng);
        singletons.truncate(unique_len);
        singletons
    };

    let mut common = by_count;
    common.truncate(common_len);

    WordRanking { common, unique }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn counts(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    // ==================== common list ====================

    #[test]
    fn common_words_sorted_by_count_then_alphabetically() {
        let counts = counts(&[("b", 2), ("a", 2), ("z", 5), ("c", 1), ("d", 1)]);
        let ranking = rank_words(&counts, &mut rng(0));

        assert_eq!(ranking.common[0], WordTally::new("z", 5));
        assert_eq!(ranking.common[1], WordTally::new("a", 2));
        assert_eq!(ranking.common[2], WordTally::new("b", 2));
    }

    #[test]
    fn common_list_caps_at_ten_entries() {
        let entries: Vec<(String, u32)> = (0..40)
            .map(|i| (format!("word{i:02}"), 40 - i as u32))
            .collect();
        let counts: HashMap<String, u32> = entries.into_iter().collect();
        let ranking = rank_words(&counts, &mut rng(0));

        assert_eq!(ranking.common.len(), RANKED_LIST_LEN);
        assert_eq!(ranking.common[0], WordTally::new("word00", 40));
        assert_eq!(ranking.common[9], WordTally::new("word09", 31));
    }

    // ==================== unique list ====================

    #[test]
    fn unique_words_sampled_from_singletons() {
        let mut entries: Vec<(String, u32)> =
            (0..12).map(|i| (format!("common{i:02}"), 5)).collect();
        entries.extend((0..15).map(|i| (format!("rare{i:02}"), 1)));
        let counts: HashMap<String, u32> = entries.into_iter().collect();

        let ranking = rank_words(&counts, &mut rng(7));

        assert_eq!(ranking.unique.len(), RANKED_LIST_LEN);
        for tally in &ranking.unique {
            assert_eq!(tally.count, 1, "{} is not a singleton", tally.word);
            assert!(tally.word.starts_with("rare"));
        }
    }

    #[test]
    fn unique_selection_is_reproducible_for_a_seed() {
        let entries: Vec<(String, u32)> = (0..30).map(|i| (format!("w{i:02}"), 1)).collect();
        let counts: HashMap<String, u32> = entries.into_iter().collect();

        let first = rank_words(&counts, &mut rng(42));
        let second = rank_words(&counts, &mut rng(42));
        assert_eq!(first, second);
    }

    #[test]
    fn too_few_singletons_fall_back_to_rarest_words() {
        // No word occurs exactly once, so the tail of the ordering is used.
        let counts = counts(&[("a", 5), ("b", 4), ("c", 3), ("d", 2), ("e", 2), ("f", 2)]);
        let ranking = rank_words(&counts, &mut rng(0));

        assert_eq!(ranking.common.len(), 3);
        assert_eq!(ranking.unique.len(), 3);
        let unique_words: Vec<&str> = ranking.unique.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(unique_words, vec!["d", "e", "f"]);
    }

    // ==================== small vocabularies ====================

    #[test]
    fn small_vocabulary_splits_between_lists() {
        let counts = counts(&[("a", 3), ("b", 2), ("c", 2), ("d", 1), ("e", 1)]);
        let ranking = rank_words(&counts, &mut rng(0));

        // 5 words: unique takes the smaller half.
        assert_eq!(ranking.common.len(), 3);
        assert_eq!(ranking.unique.len(), 2);
        assert_eq!(ranking.common[0], WordTally::new("a", 3));
        for tally in &ranking.unique {
            assert_eq!(tally.count, 1);
        }
    }

    #[test]
    fn single_word_goes_to_common_only() {
        let counts = counts(&[("alone", 7)]);
        let ranking = rank_words(&counts, &mut rng(0));

        assert_eq!(ranking.common, vec![WordTally::new("alone", 7)]);
        assert!(ranking.unique.is_empty());
    }

    #[test]
    fn empty_counts_give_empty_ranking() {
        let ranking = rank_words(&HashMap::new(), &mut rng(0));
        assert!(ranking.common.is_empty());
        assert!(ranking.unique.is_empty());
    }
}
