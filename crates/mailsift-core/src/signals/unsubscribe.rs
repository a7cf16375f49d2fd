//! Unsubscribe detection.

use serde::{Deserialize, Serialize};

/// Placeholder link offered when a thread can be unsubscribed from.
pub const DEFAULT_UNSUBSCRIBE_LINK: &str = "http://mock-unsubscribe-link.com";

/// Unsubscribe detector settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsubscribeConfig {
    /// Phrases that indicate an opt-out path (case-insensitive).
    pub phrases: Vec<String>,
    /// Link attached to positive signals. No real link extraction happens.
    pub link: String,
}

impl Default for UnsubscribeConfig {
    fn default() -> Self {
        Self {
            phrases: vec!["unsubscribe".to_string(), "manage preferences".to_string()],
            link: DEFAULT_UNSUBSCRIBE_LINK.to_string(),
        }
    }
}

/// Unsubscribe cues found in a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsubscribeSignal {
    /// Whether the text offers a way to opt out.
    pub can_unsubscribe: bool,
    /// Link to follow, present only when `can_unsubscribe` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Scans text for unsubscribe and preference-management phrases.
#[derive(Debug, Clone)]
pub struct UnsubscribeDetector {
    phrases: Vec<String>,
    link: String,
}

impl UnsubscribeDetector {
    /// Creates a detector.
    #[must_use]
    pub fn new(config: &UnsubscribeConfig) -> Self {
        Self {
            phrases: config.phrases.iter().map(|p| p.to_lowercase()).collect(),
            link: config.link.clone(),
        }
    }

    /// Scans a piece of text.
    #[must_use]
    pub fn detect(&self, text: &str) -> UnsubscribeSignal {
        let lower = text.to_lowercase();
        if self.phrases.iter().any(|p| lower.contains(p.as_str())) {
            UnsubscribeSignal {
                can_unsubscribe: true,
                link: Some(self.link.clone()),
            }
        } else {
            UnsubscribeSignal::default()
        }
    }
}

impl Default for UnsubscribeDetector {
    fn default() -> Self {
        Self::new(&UnsubscribeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsubscribe_phrase() {
        let signal = UnsubscribeDetector::default().detect("Click here to UNSUBSCRIBE.");
        assert!(signal.can_unsubscribe);
        assert_eq!(signal.link.as_deref(), Some(DEFAULT_UNSUBSCRIBE_LINK));
    }

    #[test]
    fn test_manage_preferences() {
        let signal = UnsubscribeDetector::default().detect("Manage Preferences in your account");
        assert!(signal.can_unsubscribe);
    }

    #[test]
    fn test_no_opt_out() {
        let signal = UnsubscribeDetector::default().detect("no opt-out info here");
        assert!(!signal.can_unsubscribe);
        assert!(signal.link.is_none());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(
            UnsubscribeDetector::default().detect(""),
            UnsubscribeSignal::default()
        );
    }

    #[test]
    fn test_custom_link() {
        let detector = UnsubscribeDetector::new(&UnsubscribeConfig {
            link: "https://example.com/opt-out".to_string(),
            ..UnsubscribeConfig::default()
        });
        assert_eq!(
            detector.detect("unsubscribe").link.as_deref(),
            Some("https://example.com/opt-out")
        );
    }
}
