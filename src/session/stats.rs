//! Derived statistics for rendering an aggregate.

use super::models::{LyricAggregate, LyricsState, Song};
use crate::analysis::WordTally;
use serde::Serialize;
use std::cmp::Ordering;

/// How many of a song's words a breakdown shows.
pub const TOP_WORDS_PER_SONG: usize = 3;

/// Session wide counters derived from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub total_songs: usize,
    pub pending: usize,
    pub found_lyrics: usize,
    pub instrumentals: usize,
    pub found_none: usize,
    pub failed: usize,
    pub total_words: u64,
    pub distinct_words: usize,
    pub average_words: f64,
    pub average_distinct_words: f64,
}

impl SessionSummary {
    pub fn from_aggregate(aggregate: &LyricAggregate) -> Self {
        let mut pending = 0;
        let mut found_lyrics = 0;
        let mut instrumentals = 0;
        let mut found_none = 0;
        let mut failed = 0;
        let mut total_words = 0u64;
        for song in aggregate.songs.values() {
            match song.lyrics_state {
                LyricsState::Loading => pending += 1,
                LyricsState::FoundLyrics => {
                    found_lyrics += 1;
                    if song.instrumental {
                        instrumentals += 1;
                    }
                }
                LyricsState::FoundNone => found_none += 1,
                LyricsState::Failed => failed += 1,
            }
            total_words += u64::from(song.total_words());
        }
        let distinct_words = aggregate.aggregate_word_count.len();
        // Averages divide by the found count, instrumentals included.
        let (average_words, average_distinct_words) = if found_lyrics == 0 {
            (0.0, 0.0)
        } else {
            (
                total_words as f64 / found_lyrics as f64,
                distinct_words as f64 / found_lyrics as f64,
            )
        };
        Self {
            total_songs: aggregate.songs.len(),
            pending,
            found_lyrics,
            instrumentals,
            found_none,
            failed,
            total_words,
            distinct_words,
            average_words,
            average_distinct_words,
        }
    }

    /// Songs whose lookup found actual words: found minus instrumentals.
    pub fn with_words(&self) -> usize {
        self.found_lyrics - self.instrumentals
    }
}

/// Render ready numbers for one song.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongBreakdown {
    pub title: String,
    pub lyrics_state: LyricsState,
    pub instrumental: bool,
    pub total_words: u32,
    pub distinct_words: usize,
    pub top_words: Vec<WordTally>,
    pub sentiment: Option<f64>,
}

impl SongBreakdown {
    pub fn from_song(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            lyrics_state: song.lyrics_state,
            instrumental: song.instrumental,
            total_words: song.total_words(),
            distinct_words: song.distinct_words(),
            top_words: song.top_words(TOP_WORDS_PER_SONG),
            sentiment: song.sentiment,
        }
    }
}

/// Stable display order: regular songs alphabetically, instrumentals after
/// them, songs that found no lyrics last.
pub fn display_order(a: &Song, b: &Song) -> Ordering {
    fn rank(song: &Song) -> u8 {
        if song.lyrics_state == LyricsState::FoundNone {
            2
        } else if song.instrumental {
            1
        } else {
            0
        }
    }
    rank(a).cmp(&rank(b)).then_with(|| a.title.cmp(&b.title))
}
