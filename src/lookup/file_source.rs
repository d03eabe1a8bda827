//! Lyric source backed by a directory of text files.

use super::source::{LookupError, LyricSource};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads lyrics from `<title>.txt` files inside one directory.
///
/// A missing file means the title has no lyrics, an empty or whitespace-only
/// file likewise. File contents are trimmed, so a trailing newline never
/// hides the instrumental marker.
pub struct FileLyricSource {
    dir: PathBuf,
}

impl FileLyricSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Every title the directory knows about: the stems of its `.txt` files,
    /// sorted alphabetically.
    pub async fn titles(&self) -> Result<Vec<String>, LookupError> {
        let mut titles = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "txt") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    titles.push(stem.to_string());
                }
            }
        }
        titles.sort();
        Ok(titles)
    }
}

#[async_trait]
impl LyricSource for FileLyricSource {
    async fn lookup(&self, title: &str) -> Result<Option<String>, LookupError> {
        let path = self.dir.join(format!("{title}.txt"));
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let text =
            String::from_utf8(bytes).map_err(|_| LookupError::Unreadable(title.to_string()))?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }
}
