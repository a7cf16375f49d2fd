//! Body compression.
//!
//! Reduces an email body to its newest, most relevant part:
//!
//! 1. Everything from an `On ... wrote:` reply header onwards is dropped.
//! 2. Lines starting with a `>` quote marker are dropped.
//! 3. Everything from a closing salutation (`Best regards,`, `Sincerely,`)
//!    onwards is dropped.
//! 4. Whitespace runs collapse to single spaces.
//! 5. Text with more than five `". "`-separated sentences keeps the first
//!    two and the last one.
//!
//! Compression is total: any string, including empty or malformed input,
//! yields a string.
//!
//! Markers are matched per line before whitespace is collapsed, so
//! compression is not idempotent in general: a sign-off split across lines
//! (`"Best\nregards, Bob"`) survives the first pass as `"Best regards, Bob"`
//! and is stripped by the second.

use serde::{Deserialize, Serialize};

/// Separator used to split text into sentence-like segments.
const SENTENCE_SEPARATOR: &str = ". ";

/// Suffix appended to summaries that were cut short.
const ELLIPSIS: &str = "...";

/// Compressor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressorConfig {
    /// Start of a reply header line, e.g. `On `.
    pub reply_intro: String,
    /// Text that must follow the intro on the same line, e.g. ` wrote:`.
    pub reply_marker: String,
    /// Quote marker at the start of quoted lines.
    pub quote_marker: char,
    /// Closing salutations that start a signature block.
    pub signoffs: Vec<String>,
    /// Texts with more sentences than this are shortened.
    pub max_sentences: usize,
    /// Sentences kept from the start when shortening.
    pub keep_head: usize,
    /// Sentences kept from the end when shortening.
    pub keep_tail: usize,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            reply_intro: "On ".to_string(),
            reply_marker: " wrote:".to_string(),
            quote_marker: '>',
            signoffs: vec!["Best regards,".to_string(), "Sincerely,".to_string()],
            max_sentences: 5,
            keep_head: 2,
            keep_tail: 1,
        }
    }
}

/// Rule-based body compressor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compressor {
    config: CompressorConfig,
}

impl Compressor {
    /// Creates a compressor with the given settings.
    #[must_use]
    pub const fn new(config: CompressorConfig) -> Self {
        Self { config }
    }

    /// Compresses a body of text.
    #[must_use]
    pub fn compress(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let collapsed = self
            .relevant_lines(text)
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ");

        self.shorten(collapsed)
    }

    /// Lines before any reply header or signature, with quoted lines removed.
    fn relevant_lines<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.lines()
            .take_while(move |line| !self.is_reply_header(line) && !self.is_signoff(line))
            .filter(move |line| !self.is_quoted(line))
    }

    fn is_reply_header(&self, line: &str) -> bool {
        line.trim_start()
            .strip_prefix(self.config.reply_intro.as_str())
            .is_some_and(|rest| rest.contains(self.config.reply_marker.as_str()))
    }

    fn is_quoted(&self, line: &str) -> bool {
        line.trim_start().starts_with(self.config.quote_marker)
    }

    fn is_signoff(&self, line: &str) -> bool {
        let line = line.trim_start();
        self.config
            .signoffs
            .iter()
            .any(|signoff| line.starts_with(signoff.as_str()))
    }

    /// Keeps the head and tail sentences of long texts.
    fn shorten(&self, text: String) -> String {
        let segments: Vec<&str> = text.split(SENTENCE_SEPARATOR).collect();
        if segments.len() <= self.config.max_sentences {
            return text;
        }

        let head = self.config.keep_head.min(segments.len());
        let tail = self.config.keep_tail.min(segments.len() - head);
        let kept: Vec<&str> = segments[..head]
            .iter()
            .chain(&segments[segments.len() - tail..])
            .copied()
            .collect();

        let mut shortened = kept.join(SENTENCE_SEPARATOR);
        if !shortened.ends_with('.') {
            shortened.push('.');
        }
        shortened
    }
}

/// Compresses text with the default settings.
#[must_use]
pub fn compress(text: &str) -> String {
    Compressor::default().compress(text)
}

/// Cuts a summary to at most `max_chars` characters, appending `...` when
/// anything was removed.
#[must_use]
pub fn truncate_summary(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::needless_collect)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(compress(""), "");
        assert_eq!(compress("   \n\t "), "");
    }

    #[test]
    fn test_strips_reply_header_and_rest() {
        let body = "Sounds good.\n\nOn Mon, 5 Jan 2026 at 10:00, Alice <a@x.com> wrote:\nOriginal text\nmore";
        assert_eq!(compress(body), "Sounds good.");
    }

    #[test]
    fn test_reply_intro_must_start_line() {
        let body = "Carry On as we wrote: nothing";
        assert_eq!(compress(body), "Carry On as we wrote: nothing");
    }

    #[test]
    fn test_drops_quoted_lines() {
        let body = "My answer\n> their question\n  >> older\nThanks";
        assert_eq!(compress(body), "My answer Thanks");
    }

    #[test]
    fn test_strips_signature() {
        let body = "Please send the file.\n\nBest regards,\nBob\nACME Corp";
        assert_eq!(compress(body), "Please send the file.");

        let body = "Noted.\nSincerely,\nCarol";
        assert_eq!(compress(body), "Noted.");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(compress("  a \n\n b\t\tc  "), "a b c");
    }

    #[test]
    fn test_keeps_head_and_tail_of_long_text() {
        let body = "One. Two. Three. Four. Five. Six.";
        assert_eq!(compress(body), "One. Two. Six.");
    }

    #[test]
    fn test_adds_period_when_missing() {
        let body = "One. Two. Three. Four. Five. Six";
        assert_eq!(compress(body), "One. Two. Six.");
    }

    #[test]
    fn test_keeps_trailing_ellipsis() {
        let body = "One. Two. Three. Four. Five. Wait...";
        assert_eq!(compress(body), "One. Two. Wait...");
    }

    #[test]
    fn test_signoff_split_across_lines_survives_one_pass() {
        let once = compress("Best\nregards, Bob");
        assert_eq!(once, "Best regards, Bob");
        assert_eq!(compress(&once), "");
    }

    #[test]
    fn test_five_sentences_untouched() {
        let body = "One. Two. Three. Four. Five.";
        assert_eq!(compress(body), body);
    }

    #[test]
    fn test_unbalanced_markers_do_not_panic() {
        for body in [">", ">>>", "On", "On wrote:", ". . . . . . .", "Sincerely,", "\u{feff}>x"] {
            let _ = compress(body);
        }
    }

    #[test]
    fn test_custom_config() {
        let compressor = Compressor::new(CompressorConfig {
            signoffs: vec!["Cheers".to_string()],
            max_sentences: 2,
            keep_head: 1,
            keep_tail: 1,
            ..CompressorConfig::default()
        });
        assert_eq!(compressor.compress("A. B. C.\nCheers\nDan"), "A. C.");
    }

    #[test]
    fn test_truncate_summary() {
        assert_eq!(truncate_summary("short", 200), "short");
        assert_eq!(truncate_summary("abcdef", 3), "abc...");
        assert_eq!(truncate_summary("abc", 3), "abc");
        // Cuts on character boundaries.
        assert_eq!(truncate_summary("héllo", 2), "hé...");
    }
}
