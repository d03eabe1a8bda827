//! Turns raw lyric text into the word list the rest of the analysis consumes.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Parenthesised credits block at the very start of the text,
    /// e.g. "(Lennon/McCartney)".
    static ref LEADING_CREDITS: Regex =
        Regex::new(r"^\([^)]*\)").expect("invalid leading credits regex");

    /// A word is a maximal run of characters that are not separators.
    /// Whitespace, digits and common punctuation all separate words;
    /// apostrophes and hyphens do not.
    static ref WORD: Regex =
        Regex::new(r#"[^\s0-9.,?!+*"()\\/:~#_\[\]]+"#).expect("invalid word regex");
}

/// Splits lyrics into words, keeping original casing and order of appearance.
///
/// A credits block opening the text is dropped first so that writer and label
/// credits never pollute the word counts. Only the first parenthesised run is
/// removed, and only when the text starts with it.
pub fn words_from_lyrics(lyrics: &str) -> Vec<String> {
    let body = match LEADING_CREDITS.find(lyrics) {
        Some(credits) => &lyrics[credits.end()..],
        None => lyrics,
    };
    WORD.find_iter(body)
        .map(|word| word.as_str().to_string())
        .collect()
}
