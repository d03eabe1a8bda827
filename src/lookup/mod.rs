//! Lyric lookup: the source trait, a file backed source and the session
//! driver that feeds lookup outcomes into the fold.

mod driver;
mod file_source;
mod source;

pub use driver::{run_session, DEFAULT_CONCURRENCY};
pub use file_source::FileLyricSource;
pub use source::{LookupError, LyricSource};
