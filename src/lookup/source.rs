//! The collaborator that turns a title into lyrics.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Lyrics for {0:?} are not valid UTF-8")]
    Unreadable(String),
}

/// Looks up the lyrics for one title.
///
/// `Ok(Some)` means lyrics were found, `Ok(None)` means the lookup finished
/// without lyrics, and `Err` means the lookup itself failed. Per-title
/// failures are data, not fatal errors: the caller records them and moves on.
#[async_trait]
pub trait LyricSource: Send + Sync {
    async fn lookup(&self, title: &str) -> Result<Option<String>, LookupError>;
}
