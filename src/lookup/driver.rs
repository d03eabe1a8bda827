//! Runs a whole lookup session against a lyric source.

use super::source::LyricSource;
use crate::session::{LyricAggregate, SessionTracker, SongEvent};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tracing::{info, warn};

/// How many lookups run in flight unless configured otherwise.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Starts a session for `titles`, looks every title up through `source` and
/// folds each outcome into the tracker as it arrives.
///
/// Lookups run concurrently, bounded by `concurrency`, and their outcomes
/// funnel through a channel into the tracker, one fold at a time. Outcome
/// arrival order is whatever the lookups produce; the fold does not care.
/// Returns the finished session's snapshot.
pub async fn run_session(
    tracker: &mut SessionTracker,
    source: Arc<dyn LyricSource>,
    titles: Vec<String>,
    concurrency: usize,
) -> Arc<LyricAggregate> {
    let session = tracker.begin_session(titles.clone());
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let (tx, mut rx) = mpsc::channel::<SongEvent>(32);

    for title in titles {
        let source = Arc::clone(&source);
        let semaphore = Arc::clone(&semaphore);
        let tx = tx.clone();
        tokio::spawn(async move {
            // Hold the permit for the whole lookup.
            let permit = semaphore.acquire_owned().await;
            let event = if permit.is_err() {
                SongEvent::Failed { session, title }
            } else {
                match source.lookup(&title).await {
                    Ok(Some(lyrics)) => SongEvent::FoundLyrics {
                        session,
                        title,
                        lyrics,
                    },
                    Ok(None) => SongEvent::FoundNone { session, title },
                    Err(err) => {
                        warn!(%title, error = %err, "lyric lookup failed");
                        SongEvent::Failed { session, title }
                    }
                }
            };
            let _ = tx.send(event).await;
        });
    }
    drop(tx);

    while let Some(event) = rx.recv().await {
        tracker.apply(event);
    }

    let snapshot = tracker.snapshot();
    info!(
        %session,
        songs = snapshot.songs.len(),
        distinct_words = snapshot.aggregate_word_count.len(),
        "lyric session complete"
    );
    snapshot
}
