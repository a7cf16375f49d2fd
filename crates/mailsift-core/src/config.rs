//! Pipeline configuration.
//!
//! Every section has working defaults, so `TriageConfig::default()` gives
//! the stock behaviour and a JSON file only needs the keys it overrides:
//!
//! ```json
//! { "summary_max_chars": 120, "unsubscribe": { "link": "https://example.com/opt-out" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::{ScoreGroup, ScoringConfig};
use crate::compress::CompressorConfig;
use crate::signals::{MeetingConfig, UnsubscribeConfig};
use crate::volume::DEFAULT_MINUTES_PER_THREAD;
use crate::{Error, Result};

/// Default maximum summary length in characters.
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 200;

/// Configuration for a [`TriageEngine`](crate::TriageEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Body compression settings.
    pub compressor: CompressorConfig,
    /// Priority scoring table.
    pub scoring: ScoringConfig,
    /// Meeting detection settings.
    pub meeting: MeetingConfig,
    /// Unsubscribe detection settings.
    pub unsubscribe: UnsubscribeConfig,
    /// Summaries longer than this many characters are cut with `...`.
    pub summary_max_chars: usize,
    /// Minutes assumed saved per processed thread.
    pub minutes_saved_per_thread: f64,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            compressor: CompressorConfig::default(),
            scoring: ScoringConfig::default(),
            meeting: MeetingConfig::default(),
            unsubscribe: UnsubscribeConfig::default(),
            summary_max_chars: DEFAULT_SUMMARY_MAX_CHARS,
            minutes_saved_per_thread: DEFAULT_MINUTES_PER_THREAD,
        }
    }
}

impl TriageConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> TriageConfigBuilder {
        TriageConfigBuilder::new()
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or holds
    /// invalid values.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.summary_max_chars == 0 {
            return Err(Error::Config("summary_max_chars must be positive".into()));
        }
        if !self.minutes_saved_per_thread.is_finite() || self.minutes_saved_per_thread < 0.0 {
            return Err(Error::Config(format!(
                "minutes_saved_per_thread must be a non-negative number, got {}",
                self.minutes_saved_per_thread
            )));
        }

        let compressor = &self.compressor;
        if compressor.keep_head + compressor.keep_tail == 0 {
            return Err(Error::Config(
                "compressor must keep at least one sentence".into(),
            ));
        }
        if compressor.keep_head + compressor.keep_tail > compressor.max_sentences {
            return Err(Error::Config(format!(
                "compressor keeps {} + {} sentences but shortens only above {}",
                compressor.keep_head, compressor.keep_tail, compressor.max_sentences
            )));
        }
        if compressor.reply_intro.is_empty() || compressor.reply_marker.is_empty() {
            return Err(Error::Config("reply header markers must not be empty".into()));
        }
        if compressor.signoffs.iter().any(String::is_empty) {
            return Err(Error::Config("signoffs must not be empty strings".into()));
        }

        self.scoring.groups.iter().try_for_each(validate_group)?;

        if self.meeting.keywords.iter().any(String::is_empty) {
            return Err(Error::Config("meeting keywords must not be empty".into()));
        }
        if self.unsubscribe.phrases.iter().any(String::is_empty) {
            return Err(Error::Config("unsubscribe phrases must not be empty".into()));
        }
        Ok(())
    }
}

fn validate_group(group: &ScoreGroup) -> Result<()> {
    for rule in &group.rules {
        if !rule.weight.is_finite() || rule.weight < 0.0 {
            return Err(Error::Config(format!(
                "score group '{}' has invalid weight {}",
                group.name, rule.weight
            )));
        }
        if rule.keywords.iter().any(String::is_empty) {
            return Err(Error::Config(format!(
                "score group '{}' has an empty keyword",
                group.name
            )));
        }
    }
    Ok(())
}

/// Builder for [`TriageConfig`].
#[derive(Debug, Clone, Default)]
pub struct TriageConfigBuilder {
    config: TriageConfig,
}

impl TriageConfigBuilder {
    /// Creates a builder starting from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compressor settings.
    #[must_use]
    pub fn compressor(mut self, compressor: CompressorConfig) -> Self {
        self.config.compressor = compressor;
        self
    }

    /// Sets the scoring table.
    #[must_use]
    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Sets the meeting detector settings.
    #[must_use]
    pub fn meeting(mut self, meeting: MeetingConfig) -> Self {
        self.config.meeting = meeting;
        self
    }

    /// Sets the unsubscribe detector settings.
    #[must_use]
    pub fn unsubscribe(mut self, unsubscribe: UnsubscribeConfig) -> Self {
        self.config.unsubscribe = unsubscribe;
        self
    }

    /// Sets the maximum summary length.
    #[must_use]
    pub const fn summary_max_chars(mut self, max_chars: usize) -> Self {
        self.config.summary_max_chars = max_chars;
        self
    }

    /// Sets the minutes saved per thread.
    #[must_use]
    pub const fn minutes_saved_per_thread(mut self, minutes: f64) -> Self {
        self.config.minutes_saved_per_thread = minutes;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the values are inconsistent.
    pub fn build(self) -> Result<TriageConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
