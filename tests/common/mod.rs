//! Common test infrastructure
//!
//! This module provides the infrastructure needed for end-to-end session
//! tests. Tests should only import from this module, not from internal
//! submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{seeded_tracker, titles, Outcome, ScriptedSource};
//! use lyric_census::lookup::run_session;
//! use std::sync::Arc;
//!
//! #[tokio::test]
//! async fn test_one_song_session() {
//!     let source = Arc::new(ScriptedSource::new(vec![("A", Outcome::Lyrics("la la"))]));
//!     let mut tracker = seeded_tracker();
//!
//!     let snapshot = run_session(&mut tracker, source, titles(&["A"]), 1).await;
//!     assert_eq!(snapshot.aggregate_word_count["la"], 2);
//! }
//! ```

mod fixtures;

// Public API - this is what tests import
pub use fixtures::{
    found, lyric_corpus, scripted_tracker, seeded_tracker, titles, Outcome, ScriptedSource,
};
