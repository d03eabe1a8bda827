//! Data model for a lyric analysis session.

use crate::analysis::WordTally;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Where a song stands in the lyric lookup lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LyricsState {
    Loading,
    FoundLyrics,
    FoundNone,
    Failed,
}

impl LyricsState {
    /// Terminal states never change again within a session.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LyricsState::Loading)
    }
}

/// A single song and whatever analysis its lyrics produced.
///
/// `lyric_hash`, `word_count` and `sentiment` are present exactly when
/// lyrics were found and the song is not an instrumental.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Song {
    pub title: String,
    pub lyrics_state: LyricsState,
    pub instrumental: bool,
    pub lyric_hash: Option<i32>,
    pub word_count: Option<HashMap<String, u32>>,
    pub sentiment: Option<f64>,
}

impl Song {
    /// A song whose lyrics are still being looked up.
    pub fn loading(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lyrics_state: LyricsState::Loading,
            instrumental: false,
            lyric_hash: None,
            word_count: None,
            sentiment: None,
        }
    }

    /// A song that finished its lookup without usable lyrics.
    pub fn without_lyrics(title: impl Into<String>, lyrics_state: LyricsState) -> Self {
        Self {
            lyrics_state,
            ..Self::loading(title)
        }
    }

    /// A song whose lyrics turned out to be the instrumental marker.
    pub fn instrumental(title: impl Into<String>) -> Self {
        Self {
            lyrics_state: LyricsState::FoundLyrics,
            instrumental: true,
            ..Self::loading(title)
        }
    }

    /// A song with fully analyzed lyrics.
    pub fn analyzed(
        title: impl Into<String>,
        lyric_hash: i32,
        word_count: HashMap<String, u32>,
        sentiment: f64,
    ) -> Self {
        Self {
            lyrics_state: LyricsState::FoundLyrics,
            lyric_hash: Some(lyric_hash),
            word_count: Some(word_count),
            sentiment: Some(sentiment),
            ..Self::loading(title)
        }
    }

    /// Total number of word occurrences in the song, zero without analysis.
    pub fn total_words(&self) -> u32 {
        self.word_count
            .as_ref()
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }

    /// Number of distinct words in the song, zero without analysis.
    pub fn distinct_words(&self) -> usize {
        self.word_count
            .as_ref()
            .map(|counts| counts.len())
            .unwrap_or(0)
    }

    /// The song's most frequent words, ties broken alphabetically.
    pub fn top_words(&self, limit: usize) -> Vec<WordTally> {
        let mut tallies: Vec<WordTally> = self
            .word_count
            .iter()
            .flatten()
            .map(|(word, count)| WordTally::new(word.clone(), *count))
            .collect();
        tallies.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        tallies.truncate(limit);
        tallies
    }
}

/// Monotonically increasing token minted whenever a session starts. Events
/// carry the token of the session they belong to, and folds drop events
/// whose token does not match the aggregate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything known about the current session, folded over its events.
///
/// Songs are shared via `Arc`, so cloning the aggregate copies the maps but
/// not the song payloads. Every value in `titles_by_lyric_hash` names an
/// entry of `songs`: the title that currently owns the hashed lyrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LyricAggregate {
    pub session: SessionId,
    pub songs: HashMap<String, Arc<Song>>,
    pub titles_by_lyric_hash: HashMap<i32, String>,
    pub aggregate_word_count: HashMap<String, u32>,
    pub common_words: Vec<WordTally>,
    pub unique_words: Vec<WordTally>,
    pub most_positive: Option<Arc<Song>>,
    pub most_negative: Option<Arc<Song>>,
}

impl LyricAggregate {
    /// Fresh aggregate for a new session: every title starts out loading.
    pub fn for_titles(session: SessionId, titles: &[String]) -> Self {
        let songs = titles
            .iter()
            .map(|title| (title.clone(), Arc::new(Song::loading(title.clone()))))
            .collect();
        Self {
            session,
            songs,
            ..Self::default()
        }
    }

    pub fn song(&self, title: &str) -> Option<&Song> {
        self.songs.get(title).map(|song| song.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_count(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    #[test]
    fn analysis_fields_follow_the_constructor() {
        let loading = Song::loading("One");
        assert_eq!(loading.lyrics_state, LyricsState::Loading);
        assert!(loading.lyric_hash.is_none());
        assert!(loading.word_count.is_none());
        assert!(loading.sentiment.is_none());

        let instrumental = Song::instrumental("Two");
        assert_eq!(instrumental.lyrics_state, LyricsState::FoundLyrics);
        assert!(instrumental.instrumental);
        assert!(instrumental.word_count.is_none());

        let analyzed = Song::analyzed("Three", 42, word_count(&[("la", 4)]), 0.5);
        assert_eq!(analyzed.lyrics_state, LyricsState::FoundLyrics);
        assert!(!analyzed.instrumental);
        assert_eq!(analyzed.lyric_hash, Some(42));
        assert_eq!(analyzed.sentiment, Some(0.5));
    }

    #[test]
    fn word_totals_come_from_the_count() {
        let song = Song::analyzed("T", 1, word_count(&[("la", 4), ("da", 2)]), 0.0);
        assert_eq!(song.total_words(), 6);
        assert_eq!(song.distinct_words(), 2);

        let bare = Song::without_lyrics("T", LyricsState::Failed);
        assert_eq!(bare.total_words(), 0);
        assert_eq!(bare.distinct_words(), 0);
    }

    #[test]
    fn top_words_sort_by_count_then_alphabetically() {
        let song = Song::analyzed(
            "T",
            1,
            word_count(&[("b", 2), ("a", 2), ("c", 9), ("d", 1)]),
            0.0,
        );
        let top = song.top_words(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], WordTally::new("c", 9));
        assert_eq!(top[1], WordTally::new("a", 2));
        assert_eq!(top[2], WordTally::new("b", 2));
    }

    #[test]
    fn only_loading_is_non_terminal() {
        assert!(!LyricsState::Loading.is_terminal());
        assert!(LyricsState::FoundLyrics.is_terminal());
        assert!(LyricsState::FoundNone.is_terminal());
        assert!(LyricsState::Failed.is_terminal());
    }

    #[test]
    fn lyrics_state_serializes_screaming_snake() {
        let json = serde_json::to_string(&LyricsState::FoundLyrics).unwrap();
        assert_eq!(json, "\"FOUND_LYRICS\"");
        let back: LyricsState = serde_json::from_str("\"FOUND_NONE\"").unwrap();
        assert_eq!(back, LyricsState::FoundNone);
    }

    #[test]
    fn for_titles_marks_every_title_loading() {
        let titles = vec!["A".to_string(), "B".to_string(), "A".to_string()];
        let aggregate = LyricAggregate::for_titles(SessionId(3), &titles);

        // Duplicate titles collapse onto one entry.
        assert_eq!(aggregate.songs.len(), 2);
        assert_eq!(aggregate.session, SessionId(3));
        for song in aggregate.songs.values() {
            assert_eq!(song.lyrics_state, LyricsState::Loading);
        }
        assert!(aggregate.titles_by_lyric_hash.is_empty());
        assert!(aggregate.aggregate_word_count.is_empty());
    }
}
