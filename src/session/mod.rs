//! Session state and the event fold that maintains it.

mod models;
mod reducer;
mod stats;
mod tracker;

pub use models::{LyricAggregate, LyricsState, SessionId, Song};
pub use reducer::{LyricReducer, SongEvent, INSTRUMENTAL_SENTINEL};
pub use stats::{display_order, SessionSummary, SongBreakdown, TOP_WORDS_PER_SONG};
pub use tracker::{FoldOutcome, SessionTracker};
