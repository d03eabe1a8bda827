//! Sentiment scoring of whole lyric texts.

use super::lexicon;
use serde::Serialize;

/// Outcome of scoring a text.
///
/// `comparative` is the raw score divided by the number of scored tokens,
/// which keeps long and short lyrics comparable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub score: i32,
    pub comparative: f64,
}

/// Scores a text. Implementations must be pure: the same text always yields
/// the same score.
pub trait SentimentScorer: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentScore;
}

/// Lexicon backed scorer: sums word valences over the whole text.
#[derive(Debug, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn analyze(&self, text: &str) -> SentimentScore {
        let mut score = 0i32;
        let mut tokens = 0u32;
        for raw in text.split_whitespace() {
            let token = raw
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if token.is_empty() {
                continue;
            }
            tokens += 1;
            score += lexicon::valence(&token);
        }
        let comparative = if tokens == 0 {
            0.0
        } else {
            f64::from(score) / f64::from(tokens)
        };
        SentimentScore { score, comparative }
    }
}
