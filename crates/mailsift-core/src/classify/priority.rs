//! Weighted keyword priority scoring.
//!
//! The score is a sum over independent groups (urgency, sender, body
//! keywords). Inside a group the first matching rule contributes its weight
//! and the rest are skipped. The total is rounded half to even and clamped
//! to [`MIN_PRIORITY`]..=[`MAX_PRIORITY`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::rules::{Field, RuleInput};
use crate::thread::EmailThread;

/// Lowest priority a thread can receive.
pub const MIN_PRIORITY: u8 = 1;

/// Highest priority a thread can receive.
pub const MAX_PRIORITY: u8 = 5;

/// A weighted keyword rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRule {
    /// Field to search.
    pub field: Field,
    /// Keywords, matched as case-insensitive substrings.
    pub keywords: Vec<String>,
    /// Points added when any keyword matches.
    pub weight: f64,
}

impl ScoreRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(field: Field, keywords: &[&str], weight: f64) -> Self {
        Self {
            field,
            keywords: keywords.iter().map(ToString::to_string).collect(),
            weight,
        }
    }
}

/// Mutually exclusive rules; at most one contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreGroup {
    /// Name used in logs.
    pub name: String,
    /// Rules in evaluation order.
    pub rules: Vec<ScoreRule>,
}

impl ScoreGroup {
    /// Creates a group.
    #[must_use]
    pub fn new(name: impl Into<String>, rules: Vec<ScoreRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}

/// Scoring table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Groups whose contributions are summed.
    pub groups: Vec<ScoreGroup>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            groups: vec![
                ScoreGroup::new(
                    "urgency",
                    vec![
                        ScoreRule::new(Field::Subject, &["urgent", "asap", "deadline"], 2.0),
                        ScoreRule::new(Field::Subject, &["important"], 1.5),
                    ],
                ),
                ScoreGroup::new(
                    "sender",
                    vec![
                        ScoreRule::new(Field::Sender, &["boss", "ceo"], 1.5),
                        ScoreRule::new(Field::Sender, &["client"], 1.5),
                    ],
                ),
                ScoreGroup::new(
                    "keywords",
                    vec![ScoreRule::new(Field::Body, &["review", "approve"], 1.5)],
                ),
            ],
        }
    }
}

/// Maps a thread to a priority in `1..=5`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityScorer {
    groups: Vec<ScoreGroup>,
}

impl PriorityScorer {
    /// Builds a scorer from a scoring table. Keywords are lowercased here.
    #[must_use]
    pub fn new(config: &ScoringConfig) -> Self {
        let groups = config
            .groups
            .iter()
            .map(|group| ScoreGroup {
                name: group.name.clone(),
                rules: group
                    .rules
                    .iter()
                    .map(|rule| ScoreRule {
                        field: rule.field,
                        keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
                        weight: rule.weight,
                    })
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    /// Scores a thread.
    #[must_use]
    pub fn score(&self, thread: &EmailThread) -> u8 {
        self.score_input(&RuleInput::new(thread, MIN_PRIORITY))
    }

    /// Scores an already prepared input. Its priority is ignored.
    #[must_use]
    pub fn score_input(&self, input: &RuleInput) -> u8 {
        let raw = self.raw_score(input);
        let priority = clamp_priority(raw);
        trace!(raw, priority, "scored thread");
        priority
    }

    /// Unrounded sum of the matching weights.
    #[must_use]
    pub fn raw_score(&self, input: &RuleInput) -> f64 {
        self.groups
            .iter()
            .filter_map(|group| {
                group
                    .rules
                    .iter()
                    .find(|rule| input.contains_any(rule.field, &rule.keywords))
                    .map(|rule| rule.weight)
            })
            .sum()
    }
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

/// Rounds half to even and clamps into the priority range.
///
/// Non-finite scores fall to [`MIN_PRIORITY`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_priority(raw: f64) -> u8 {
    if !raw.is_finite() {
        return MIN_PRIORITY;
    }
    raw.round_ties_even()
        .clamp(f64::from(MIN_PRIORITY), f64::from(MAX_PRIORITY)) as u8
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn score(subject: &str, sender: &str, body: &str) -> u8 {
        PriorityScorer::default().score(
            &EmailThread::new("t")
                .subject(subject)
                .sender(sender)
                .body(body),
        )
    }

    #[test]
    fn test_all_groups_match() {
        assert_eq!(
            score(
                "URGENT: Deadline Friday",
                "boss@company.com",
                "Please review and approve."
            ),
            5
        );
    }

    #[test]
    fn test_nothing_matches_floors_to_one() {
        assert_eq!(score("Hello", "friend@example.com", "How are you?"), 1);
        assert_eq!(score("", "", ""), 1);
    }

    #[test]
    fn test_ties_round_to_even() {
        // 1.5 -> 2
        assert_eq!(score("Important", "", ""), 2);
        // 1.5 + 1.5 = 3.0
        assert_eq!(score("Important", "client@corp.com", ""), 3);
        // 2.0 + 1.5 = 3.5 -> 4
        assert_eq!(score("ASAP", "ceo@corp.com", ""), 4);
        // 1.5 * 3 = 4.5 -> 4
        assert_eq!(score("Important", "client@corp.com", "please review"), 4);
    }

    #[test]
    fn test_groups_are_exclusive_inside() {
        // Both urgency rules match but only the first contributes.
        let scorer = PriorityScorer::default();
        let input = RuleInput::new(
            &EmailThread::new("t").subject("urgent and important"),
            MIN_PRIORITY,
        );
        assert_eq!(scorer.raw_score(&input), 2.0);
    }

    #[test]
    fn test_substring_matching() {
        // "approved" contains "approve"; "approval" does not.
        assert_eq!(score("", "", "approved"), 2);
        assert_eq!(score("", "", "approval"), 1);
    }

    #[test]
    fn test_clamp_priority() {
        assert_eq!(clamp_priority(-3.0), 1);
        assert_eq!(clamp_priority(0.0), 1);
        assert_eq!(clamp_priority(2.5), 2);
        assert_eq!(clamp_priority(42.0), 5);
        assert_eq!(clamp_priority(f64::NAN), 1);
        assert_eq!(clamp_priority(f64::INFINITY), 1);
    }

    #[test]
    fn test_custom_table_keywords_lowercased() {
        let config = ScoringConfig {
            groups: vec![ScoreGroup::new(
                "vip",
                vec![ScoreRule::new(Field::Sender, &["VIP"], 4.0)],
            )],
        };
        let scorer = PriorityScorer::new(&config);
        assert_eq!(scorer.score(&EmailThread::new("t").sender("vip@corp.com")), 4);
    }
}
