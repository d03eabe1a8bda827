//! The per-event fold that maintains a session's aggregate analysis.

use super::models::{LyricAggregate, LyricsState, SessionId, Song};
use crate::analysis::{
    count_words, lyric_hash, rank_words, words_from_lyrics, LexiconScorer, SentimentScorer,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use tracing::debug;

/// Lyrics equal to this marker mean the recording has no words at all.
pub const INSTRUMENTAL_SENTINEL: &str = "Instrumental";

/// A song only becomes the positive extreme above this comparative score,
/// and the negative extreme below its negation.
const EXTREME_THRESHOLD: f64 = 0.1;

/// One lyric lookup outcome, tagged with the session it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum SongEvent {
    /// Start over with a fresh set of titles.
    Reset {
        session: SessionId,
        titles: Vec<String>,
    },
    /// Lyrics were found for the title.
    FoundLyrics {
        session: SessionId,
        title: String,
        lyrics: String,
    },
    /// The lookup finished but yielded no lyrics.
    FoundNone { session: SessionId, title: String },
    /// The lookup itself failed.
    Failed { session: SessionId, title: String },
}

impl SongEvent {
    pub fn session(&self) -> SessionId {
        match self {
            SongEvent::Reset { session, .. }
            | SongEvent::FoundLyrics { session, .. }
            | SongEvent::FoundNone { session, .. }
            | SongEvent::Failed { session, .. } => *session,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            SongEvent::Reset { .. } => None,
            SongEvent::FoundLyrics { title, .. }
            | SongEvent::FoundNone { title, .. }
            | SongEvent::Failed { title, .. } => Some(title),
        }
    }
}

/// Folds song events into aggregates.
///
/// A fold never mutates its input: every event builds a new aggregate, so
/// snapshots handed out earlier stay exactly as they were. Apart from the
/// rng driving the unique word sampling, the fold is a pure function of the
/// previous aggregate and the event.
pub struct LyricReducer {
    scorer: Box<dyn SentimentScorer>,
    rng: Box<dyn RngCore + Send>,
}

impl LyricReducer {
    /// Reducer with the default scorer and OS seeded randomness.
    pub fn new() -> Self {
        Self::with_parts(
            Box::new(LexiconScorer::new()),
            Box::new(StdRng::from_os_rng()),
        )
    }

    /// Reducer whose word sampling is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(
            Box::new(LexiconScorer::new()),
            Box::new(StdRng::seed_from_u64(seed)),
        )
    }

    /// Reducer with both collaborators injected.
    pub fn with_parts(scorer: Box<dyn SentimentScorer>, rng: Box<dyn RngCore + Send>) -> Self {
        Self { scorer, rng }
    }

    /// Folds one event into `prev` and returns the next aggregate.
    ///
    /// A `Reset` always applies and adopts the event's session. Every other
    /// event must carry the aggregate's current session; mismatches are
    /// dropped and `prev` comes back unchanged.
    pub fn apply(&mut self, prev: &LyricAggregate, event: &SongEvent) -> LyricAggregate {
        match event {
            SongEvent::Reset { session, titles } => LyricAggregate::for_titles(*session, titles),
            _ if event.session() != prev.session => {
                debug!(
                    event_session = %event.session(),
                    current_session = %prev.session,
                    "dropping event from a superseded session"
                );
                prev.clone()
            }
            SongEvent::FoundNone { title, .. } => {
                Self::with_song(prev, Song::without_lyrics(title.clone(), LyricsState::FoundNone))
            }
            SongEvent::Failed { title, .. } => {
                Self::with_song(prev, Song::without_lyrics(title.clone(), LyricsState::Failed))
            }
            SongEvent::FoundLyrics { title, lyrics, .. } => self.apply_lyrics(prev, title, lyrics),
        }
    }

    fn with_song(prev: &LyricAggregate, song: Song) -> LyricAggregate {
        let mut next = prev.clone();
        next.songs.insert(song.title.clone(), Arc::new(song));
        next
    }

    fn apply_lyrics(&mut self, prev: &LyricAggregate, title: &str, lyrics: &str) -> LyricAggregate {
        if lyrics == INSTRUMENTAL_SENTINEL {
            return Self::with_song(prev, Song::instrumental(title));
        }

        let words = words_from_lyrics(lyrics);
        if words.is_empty() {
            return Self::with_song(prev, Song::without_lyrics(title, LyricsState::FoundNone));
        }

        // The hash covers the raw text, credits block and all, so only true
        // duplicates collapse.
        let hash = lyric_hash(lyrics);
        if let Some(owner) = prev.titles_by_lyric_hash.get(&hash) {
            if let Some(owned) = prev.songs.get(owner) {
                return Self::collapse_duplicate(prev, title, owner, owned, hash);
            }
        }

        let word_count = count_words(&words);
        let sentiment = self.scorer.analyze(lyrics).comparative;

        let mut next = prev.clone();
        for (word, count) in &word_count {
            *next.aggregate_word_count.entry(word.clone()).or_insert(0) += count;
        }
        let ranking = rank_words(&next.aggregate_word_count, self.rng.as_mut());
        next.common_words = ranking.common;
        next.unique_words = ranking.unique;

        let song = Arc::new(Song::analyzed(title, hash, word_count, sentiment));
        next.songs.insert(title.to_string(), Arc::clone(&song));
        next.titles_by_lyric_hash.insert(hash, title.to_string());

        if sentiment > EXTREME_THRESHOLD {
            let improves = match next.most_positive.as_deref().and_then(|s| s.sentiment) {
                Some(current) => sentiment > current,
                None => true,
            };
            if improves {
                next.most_positive = Some(Arc::clone(&song));
            }
        } else if sentiment < -EXTREME_THRESHOLD {
            let improves = match next.most_negative.as_deref().and_then(|s| s.sentiment) {
                Some(current) => sentiment < current,
                None => true,
            };
            if improves {
                next.most_negative = Some(Arc::clone(&song));
            }
        }
        next
    }

    /// Two titles produced identical lyrics: the shorter title keeps the
    /// song, counting length in UTF-16 units, and ties keep the incumbent.
    fn collapse_duplicate(
        prev: &LyricAggregate,
        title: &str,
        owner: &str,
        owned: &Arc<Song>,
        hash: i32,
    ) -> LyricAggregate {
        if owner == title {
            // The same song reported the same lyrics again.
            return prev.clone();
        }
        let mut next = prev.clone();
        if utf16_len(title) >= utf16_len(owner) {
            debug!(kept = owner, discarded = title, "collapsing duplicate lyrics");
            next.songs.remove(title);
            return next;
        }
        debug!(kept = title, discarded = owner, "collapsing duplicate lyrics");
        let renamed = Song {
            title: title.to_string(),
            ..(**owned).clone()
        };
        next.songs.remove(owner);
        next.songs.insert(title.to_string(), Arc::new(renamed));
        next.titles_by_lyric_hash.insert(hash, title.to_string());
        next
    }
}

impl Default for LyricReducer {
    fn default() -> Self {
        Self::new()
    }
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
