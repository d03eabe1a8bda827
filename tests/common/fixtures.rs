//! Test fixture creation: lyric corpora on disk and scripted collaborators
//! for driving sessions without real lookups.

use async_trait::async_trait;
use lyric_census::analysis::{SentimentScore, SentimentScorer};
use lyric_census::lookup::{LookupError, LyricSource};
use lyric_census::session::{LyricReducer, SessionId, SessionTracker, SongEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::Duration;
use tempfile::TempDir;

/// Writes one `<title>.txt` file per entry into a fresh temp directory.
pub fn lyric_corpus(entries: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (title, lyrics) in entries {
        std::fs::write(dir.path().join(format!("{title}.txt")), lyrics).unwrap();
    }
    dir
}

pub fn titles(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// `FoundLyrics` event carrying the given session token.
pub fn found(session: SessionId, title: &str, lyrics: &str) -> SongEvent {
    SongEvent::FoundLyrics {
        session,
        title: title.to_string(),
        lyrics: lyrics.to_string(),
    }
}

/// What a scripted lookup produces for one title.
pub enum Outcome {
    Lyrics(&'static str),
    Nothing,
    Fails,
}

/// Lyric source with fully scripted outcomes and optional per-title delays,
/// so tests decide what resolves and in which order.
pub struct ScriptedSource {
    outcomes: HashMap<String, Outcome>,
    delays_ms: HashMap<String, u64>,
}

impl ScriptedSource {
    pub fn new(entries: Vec<(&str, Outcome)>) -> Self {
        Self {
            outcomes: entries
                .into_iter()
                .map(|(title, outcome)| (title.to_string(), outcome))
                .collect(),
            delays_ms: HashMap::new(),
        }
    }

    /// Delays the title's lookup so it completes after the faster ones.
    pub fn delayed(mut self, title: &str, ms: u64) -> Self {
        self.delays_ms.insert(title.to_string(), ms);
        self
    }
}

#[async_trait]
impl LyricSource for ScriptedSource {
    async fn lookup(&self, title: &str) -> Result<Option<String>, LookupError> {
        if let Some(ms) = self.delays_ms.get(title) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        match self.outcomes.get(title) {
            Some(Outcome::Lyrics(lyrics)) => Ok(Some(lyrics.to_string())),
            Some(Outcome::Nothing) | None => Ok(None),
            Some(Outcome::Fails) => Err(LookupError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "scripted failure",
            ))),
        }
    }
}

/// Scorer answering a fixed comparative score per lyric text, zero for
/// anything unscripted.
pub struct ScriptedScorer(HashMap<String, f64>);

impl ScriptedScorer {
    pub fn new(scores: &[(&str, f64)]) -> Self {
        Self(
            scores
                .iter()
                .map(|(text, score)| (text.to_string(), *score))
                .collect(),
        )
    }
}

impl SentimentScorer for ScriptedScorer {
    fn analyze(&self, text: &str) -> SentimentScore {
        SentimentScore {
            score: 0,
            comparative: self.0.get(text).copied().unwrap_or(0.0),
        }
    }
}

/// Tracker whose unique-word sampling replays identically across runs.
pub fn seeded_tracker() -> SessionTracker {
    SessionTracker::new(LyricReducer::seeded(0))
}

/// Tracker with scripted sentiment and reproducible sampling.
pub fn scripted_tracker(scores: &[(&str, f64)]) -> SessionTracker {
    SessionTracker::new(LyricReducer::with_parts(
        Box::new(ScriptedScorer::new(scores)),
        Box::new(StdRng::seed_from_u64(0)),
    ))
}
