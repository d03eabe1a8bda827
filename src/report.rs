//! Rendering of a finished session: a plain text report in the shape of the
//! original summary-plus-table view, or the same data as pretty JSON.

use crate::analysis::WordTally;
use crate::session::{
    display_order, LyricAggregate, LyricsState, SessionId, SessionSummary, Song, SongBreakdown,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

const STATE_SEARCHING: &str = "Searching...";
const STATE_NO_LYRICS: &str = "No Lyrics Found";
const STATE_INSTRUMENTAL: &str = "Instrumental Song";

/// Everything the JSON report exposes about one session.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub artist: String,
    pub session: SessionId,
    pub summary: SessionSummary,
    pub songs: Vec<SongBreakdown>,
    pub common_words: Vec<WordTally>,
    pub unique_words: Vec<WordTally>,
    pub most_positive: Option<SongBreakdown>,
    pub most_negative: Option<SongBreakdown>,
}

impl SessionReport {
    pub fn from_aggregate(artist: &str, aggregate: &LyricAggregate) -> Self {
        let mut songs: Vec<&Song> = aggregate.songs.values().map(|song| song.as_ref()).collect();
        songs.sort_by(|a, b| display_order(a, b));
        Self {
            artist: artist.to_string(),
            session: aggregate.session,
            summary: SessionSummary::from_aggregate(aggregate),
            songs: songs.into_iter().map(SongBreakdown::from_song).collect(),
            common_words: aggregate.common_words.clone(),
            unique_words: aggregate.unique_words.clone(),
            most_positive: aggregate
                .most_positive
                .as_deref()
                .map(SongBreakdown::from_song),
            most_negative: aggregate
                .most_negative
                .as_deref()
                .map(SongBreakdown::from_song),
        }
    }
}

/// The session as pretty printed JSON.
pub fn render_json(artist: &str, aggregate: &LyricAggregate) -> Result<String> {
    let report = SessionReport::from_aggregate(artist, aggregate);
    serde_json::to_string_pretty(&report).context("Failed to serialize session report")
}

/// The session as a plain text report: artist header, summary sentences,
/// ranked word lists, sentiment picks and the per-song table.
pub fn render_text(artist: &str, aggregate: &LyricAggregate) -> String {
    let summary = SessionSummary::from_aggregate(aggregate);
    let mut out = String::new();

    let _ = writeln!(out, "{artist}");
    let _ = writeln!(out, "{}", "=".repeat(artist.chars().count().max(1)));
    let _ = writeln!(out);

    if let Some(totals) = song_totals(&summary) {
        let _ = writeln!(out, "{totals}");
    }
    for line in word_statistics(&summary) {
        let _ = writeln!(out, "{line}");
    }

    let common = word_tally_line("Most common words", &aggregate.common_words);
    let unique = word_tally_line("Least common words", &aggregate.unique_words);
    if common.is_some() || unique.is_some() {
        let _ = writeln!(out);
        for line in [common, unique].into_iter().flatten() {
            let _ = writeln!(out, "{line}");
        }
    }

    if aggregate.most_positive.is_some() || aggregate.most_negative.is_some() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Songs chosen by lyric sentiment:");
        if let Some(song) = aggregate.most_positive.as_deref() {
            let _ = writeln!(out, "  Most positive: {}", sentiment_pick(song));
        }
        if let Some(song) = aggregate.most_negative.as_deref() {
            let _ = writeln!(out, "  Most negative: {}", sentiment_pick(song));
        }
    }

    if !aggregate.songs.is_empty() {
        let _ = writeln!(out);
        render_table(&mut out, aggregate);
    }
    out
}

/// "Found lyrics for 2 out of 17 recordings. 1 song is an instrumental."
fn song_totals(summary: &SessionSummary) -> Option<String> {
    let totals = match summary.total_songs {
        0 => return None,
        1 => "1 recording".to_string(),
        n => format!("{n} recordings"),
    };
    let mut line = format!("Found lyrics for {} out of {totals}.", summary.with_words());
    match summary.instrumentals {
        0 => {}
        1 => line.push_str(" 1 song is an instrumental."),
        n => {
            let _ = write!(line, " {n} songs are instrumentals.");
        }
    }
    Some(line)
}

fn word_statistics(summary: &SessionSummary) -> Vec<String> {
    if summary.found_lyrics == 0 {
        return Vec::new();
    }
    vec![
        format!(
            "The total number of words found is {}, an average of {:.2} per song.",
            summary.total_words, summary.average_words
        ),
        format!(
            "There are {} unique words in the lyrics, an average of {:.2} per song.",
            summary.distinct_words, summary.average_distinct_words
        ),
    ]
}

/// "Most common words: Love (12), Night (9)."
fn word_tally_line(label: &str, tallies: &[WordTally]) -> Option<String> {
    if tallies.is_empty() {
        return None;
    }
    let words: Vec<String> = tallies
        .iter()
        .map(|tally| format!("{} ({})", capitalize_first(&tally.word), tally.count))
        .collect();
    Some(format!("{label}: {}.", words.join(", ")))
}

fn sentiment_pick(song: &Song) -> String {
    match song.sentiment {
        Some(sentiment) => format!("{} ({sentiment:.2})", song.title),
        None => song.title.clone(),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn render_table(out: &mut String, aggregate: &LyricAggregate) {
    let mut songs: Vec<&Song> = aggregate.songs.values().map(|song| song.as_ref()).collect();
    songs.sort_by(|a, b| display_order(a, b));

    let rows: Vec<(&Song, Option<String>)> = songs
        .into_iter()
        .map(|song| (song, top_words_cell(song)))
        .collect();

    let title_w = rows
        .iter()
        .map(|(song, _)| song.title.chars().count())
        .chain(["Song Title".len()])
        .max()
        .unwrap_or(0);
    let words_w = rows
        .iter()
        .filter_map(|(_, cell)| cell.as_ref().map(|c| c.chars().count()))
        .chain(["Most Common Words".len()])
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{:<title_w$}  {:>11}  {:>12}  {:<words_w$}  {:>9}",
        "Song Title", "Total Words", "Unique Words", "Most Common Words", "Sentiment"
    );
    let _ = writeln!(out, "{}", "-".repeat(title_w + words_w + 40));

    for (song, words) in rows {
        match words {
            Some(words) => {
                let sentiment = song
                    .sentiment
                    .map(|s| format!("{s:.2}"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "{:<title_w$}  {:>11}  {:>12}  {:<words_w$}  {:>9}",
                    song.title,
                    song.total_words(),
                    song.distinct_words(),
                    words,
                    sentiment
                );
            }
            None => {
                let _ = writeln!(out, "{:<title_w$}  {}", song.title, state_cell(song));
            }
        }
    }
}

/// The comma joined top words, or `None` for rows that render a state
/// instead of numbers.
fn top_words_cell(song: &Song) -> Option<String> {
    if song.lyrics_state != LyricsState::FoundLyrics || song.instrumental {
        return None;
    }
    let words: Vec<String> = song
        .top_words(crate::session::TOP_WORDS_PER_SONG)
        .into_iter()
        .map(|tally| capitalize_first(&tally.word))
        .collect();
    Some(words.join(", "))
}

fn state_cell(song: &Song) -> &'static str {
    match song.lyrics_state {
        LyricsState::Loading => STATE_SEARCHING,
        LyricsState::FoundNone | LyricsState::Failed => STATE_NO_LYRICS,
        LyricsState::FoundLyrics => STATE_INSTRUMENTAL,
    }
}
