//! Single owner of the session fold.

use super::models::{LyricAggregate, SessionId};
use super::reducer::{LyricReducer, SongEvent};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of handing an event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOutcome {
    /// The event belonged to the current session and was folded in.
    Applied,
    /// The event carried a superseded session token and was dropped.
    Stale,
}

/// Owns the current aggregate and serializes every fold through `&mut self`.
///
/// Lookup tasks run concurrently, but their outcomes funnel through one
/// tracker, so no two folds ever race. Readers take `snapshot()` and keep it
/// as long as they like; later folds never touch an aggregate already handed
/// out.
pub struct SessionTracker {
    reducer: LyricReducer,
    current: Arc<LyricAggregate>,
    sessions_started: u64,
}

impl SessionTracker {
    pub fn new(reducer: LyricReducer) -> Self {
        Self {
            reducer,
            current: Arc::new(LyricAggregate::default()),
            sessions_started: 0,
        }
    }

    /// Mints the next session token and resets the aggregate onto `titles`.
    pub fn begin_session(&mut self, titles: Vec<String>) -> SessionId {
        self.sessions_started += 1;
        let session = SessionId(self.sessions_started);
        info!(%session, titles = titles.len(), "starting lyric session");
        let reset = SongEvent::Reset { session, titles };
        self.current = Arc::new(self.reducer.apply(&self.current, &reset));
        session
    }

    /// Folds one lookup outcome into the current aggregate.
    pub fn apply(&mut self, event: SongEvent) -> FoldOutcome {
        if let SongEvent::Reset { session, .. } = &event {
            // Resets folded in directly still keep the token mint ahead.
            self.sessions_started = self.sessions_started.max(session.0);
            self.current = Arc::new(self.reducer.apply(&self.current, &event));
            return FoldOutcome::Applied;
        }
        if event.session() != self.current.session {
            debug!(
                event_session = %event.session(),
                current_session = %self.current.session,
                title = event.title().unwrap_or(""),
                "ignoring stale lookup outcome"
            );
            return FoldOutcome::Stale;
        }
        self.current = Arc::new(self.reducer.apply(&self.current, &event));
        FoldOutcome::Applied
    }

    /// The current aggregate, cheap to take and immune to later folds.
    pub fn snapshot(&self) -> Arc<LyricAggregate> {
        Arc::clone(&self.current)
    }

    pub fn session(&self) -> SessionId {
        self.current.session
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new(LyricReducer::new())
    }
}
