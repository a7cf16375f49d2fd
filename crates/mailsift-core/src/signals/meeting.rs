//! Meeting detection.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Weekday + day + month, e.g. `Mon, 5 Jan` or `Fri, 12 Dec 2025`.
const DATE_PATTERN: &str = r"\b(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun), \d{1,2} (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)(?: \d{4})?\b";

/// Clock time with an am/pm suffix, e.g. `3pm`, `10:30 AM`.
const TIME_PATTERN: &str = r"\b\d{1,2}(?::\d{2})? ?(?:am|pm|AM|PM)\b";

/// Meeting detector settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingConfig {
    /// Keywords that mark text as meeting related (case-insensitive).
    pub keywords: Vec<String>,
    /// Title suggested for detected meetings.
    pub suggested_title: String,
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self {
            keywords: vec!["meeting".to_string(), "zoom".to_string()],
            suggested_title: "Meeting".to_string(),
        }
    }
}

/// Meeting cues found in a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSignal {
    /// Whether the text looks like it is about a meeting.
    pub is_meeting: bool,
    /// Title to use when adding the meeting to a calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_title: Option<String>,
    /// Distinct date expressions, in order of first appearance.
    pub dates_detected: Vec<String>,
    /// Distinct clock times, in order of first appearance.
    pub times_detected: Vec<String>,
}

/// Scans text for dates, times and meeting keywords.
#[derive(Debug, Clone)]
pub struct MeetingDetector {
    date: Regex,
    time: Regex,
    keywords: Vec<String>,
    suggested_title: String,
}

impl MeetingDetector {
    /// Compiles the detector.
    ///
    /// # Errors
    ///
    /// Returns an error if a detection pattern fails to compile.
    pub fn new(config: &MeetingConfig) -> Result<Self> {
        Ok(Self {
            date: Regex::new(DATE_PATTERN)?,
            time: Regex::new(TIME_PATTERN)?,
            keywords: config.keywords.iter().map(|k| k.to_lowercase()).collect(),
            suggested_title: config.suggested_title.clone(),
        })
    }

    /// Scans a piece of text.
    #[must_use]
    pub fn detect(&self, text: &str) -> MeetingSignal {
        let dates_detected = distinct_matches(&self.date, text);
        let times_detected = distinct_matches(&self.time, text);
        let has_keyword = {
            let lower = text.to_lowercase();
            self.keywords.iter().any(|k| lower.contains(k.as_str()))
        };

        let is_meeting = !dates_detected.is_empty() || !times_detected.is_empty() || has_keyword;
        MeetingSignal {
            is_meeting,
            suggested_title: is_meeting.then(|| self.suggested_title.clone()),
            dates_detected,
            times_detected,
        }
    }
}

fn distinct_matches(pattern: &Regex, text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in pattern.find_iter(text) {
        if !found.iter().any(|f| f == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }
    found
}
