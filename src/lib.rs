//! Lyric Census Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod analysis;
pub mod config;
pub mod lookup;
pub mod report;
pub mod session;

// Re-export commonly used types for convenience
pub use analysis::{LexiconScorer, SentimentScorer, WordTally};
pub use lookup::{run_session, FileLyricSource, LyricSource};
pub use session::{LyricAggregate, LyricReducer, SessionTracker, SongEvent};
