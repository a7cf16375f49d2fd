//! Thread data models.

use serde::{Deserialize, Serialize};

use crate::classify::{Category, FolderLabel};
use crate::signals::{MeetingSignal, UnsubscribeSignal};

/// Subject reported for threads that arrive without one.
pub const NO_SUBJECT: &str = "No Subject";

/// Sender reported for threads that arrive without one.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// One email conversation as handed to the pipeline.
///
/// Every field is optional on input and defaults to an empty string, so a
/// partially filled thread never fails annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailThread {
    /// Caller-assigned identifier.
    pub id: String,
    /// Subject line.
    pub subject: String,
    /// Sender, either a bare address or `Name <address>`.
    pub sender: String,
    /// Plain-text body.
    pub body: String,
    /// Free-form date string. Not guaranteed to be parseable.
    pub date: String,
}

impl EmailThread {
    /// Creates an empty thread with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the subject.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the sender.
    #[must_use]
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the date.
    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Subject for display, falling back to [`NO_SUBJECT`].
    #[must_use]
    pub fn display_subject(&self) -> &str {
        if self.subject.trim().is_empty() {
            NO_SUBJECT
        } else {
            &self.subject
        }
    }

    /// Sender for display, falling back to [`UNKNOWN_SENDER`].
    #[must_use]
    pub fn display_sender(&self) -> &str {
        if self.sender.trim().is_empty() {
            UNKNOWN_SENDER
        } else {
            &self.sender
        }
    }
}

/// A thread after it has been through the annotation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedThread {
    /// Identifier copied from the input thread.
    pub id: String,
    /// Subject, or [`NO_SUBJECT`].
    pub subject: String,
    /// Sender, or [`UNKNOWN_SENDER`].
    pub sender: String,
    /// Raw date string, used as the ranking tie-breaker.
    pub date: String,
    /// Priority score in `1..=5`.
    pub priority: u8,
    /// Primary category.
    pub category: Category,
    /// Compressed body, shortened for display.
    pub summary: String,
    /// Length of the original body in characters.
    pub original_length: usize,
    /// Length of the compressed body in characters.
    pub compressed_length: usize,
    /// Size reduction as a percentage string such as `"87%"`.
    pub compression_ratio: String,
}

impl AnnotatedThread {
    /// Size reduction as a number in `0..=100`.
    #[must_use]
    pub fn compression_percent(&self) -> u8 {
        compression_percent(self.original_length, self.compressed_length)
    }
}

/// Computes the size reduction between two lengths, clamped to `0..=100`.
///
/// The denominator carries a `+1`; an empty original reports no reduction.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn compression_percent(original: usize, compressed: usize) -> u8 {
    if original == 0 {
        return 0;
    }
    let ratio = 1.0 - (compressed as f64 / (original as f64 + 1.0));
    (ratio * 100.0).trunc().clamp(0.0, 100.0) as u8
}

/// Full single-thread result: annotation plus auxiliary signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageReport {
    /// The annotated thread.
    #[serde(flatten)]
    pub thread: AnnotatedThread,
    /// Display folder.
    pub smart_folder: FolderLabel,
    /// Meeting cues found in the body.
    pub meeting_info: MeetingSignal,
    /// Unsubscribe cues found in the body.
    pub unsubscribe_info: UnsubscribeSignal,
}

/// Result of annotating, ranking and recording one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Number of threads processed.
    pub processed_count: usize,
    /// Mean compression over the batch, e.g. `"64%"`.
    pub average_compression: String,
    /// Annotated threads, highest priority first.
    pub results: Vec<AnnotatedThread>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let thread: EmailThread = serde_json::from_str(r#"{"id": "t1"}"#).unwrap();
        assert_eq!(thread.id, "t1");
        assert!(thread.subject.is_empty());
        assert!(thread.body.is_empty());
    }

    #[test]
    fn test_display_sentinels() {
        let thread = EmailThread::new("t1");
        assert_eq!(thread.display_subject(), NO_SUBJECT);
        assert_eq!(thread.display_sender(), UNKNOWN_SENDER);

        let thread = thread.subject("Hello").sender("a@example.com");
        assert_eq!(thread.display_subject(), "Hello");
        assert_eq!(thread.display_sender(), "a@example.com");
    }

    #[test]
    fn test_compression_percent_bounds() {
        assert_eq!(compression_percent(0, 0), 0);
        assert_eq!(compression_percent(99, 50), 50);
        assert_eq!(compression_percent(3, 1), 75);
        // Expansion is clamped rather than going negative.
        assert_eq!(compression_percent(2, 10), 0);
        assert_eq!(compression_percent(1000, 0), 100);
    }
}
