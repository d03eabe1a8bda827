//! Pure text analysis: tokenizing, hashing, counting and scoring lyrics.
//!
//! Everything in here is deterministic given its inputs (the word ranking
//! takes its randomness as an argument), so the session layer can replay
//! events and land on identical aggregates.

mod lexicon;
mod lyric_hash;
mod sentiment;
mod tokenize;
mod word_count;
mod word_ranking;

pub use lyric_hash::lyric_hash;
pub use sentiment::{LexiconScorer, SentimentScore, SentimentScorer};
pub use tokenize::words_from_lyrics;
pub use word_count::count_words;
pub use word_ranking::{rank_words, WordRanking, WordTally, RANKED_LIST_LEN};
