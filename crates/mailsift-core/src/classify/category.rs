//! Primary thread categories.

use serde::{Deserialize, Serialize};

use super::rules::{Condition, RuleInput, RuleSet};
use crate::thread::EmailThread;

/// Primary category attached to every annotated thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// High priority; deal with it now.
    Urgent,
    /// Needs a response or a decision, such as a meeting invite.
    Action,
    /// Nothing specific required yet.
    #[default]
    Awaiting,
    /// Status updates and FYIs.
    Information,
    /// Bulk mail with an unsubscribe path.
    Newsletter,
    /// Junk. Part of the label set, produced only by custom rule tables.
    Spam,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Urgent,
        Self::Action,
        Self::Awaiting,
        Self::Information,
        Self::Newsletter,
        Self::Spam,
    ];

    /// Parse from string representation. Unknown labels map to `Awaiting`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Self::Urgent,
            "action" => Self::Action,
            "information" => Self::Information,
            "newsletter" => Self::Newsletter,
            "spam" => Self::Spam,
            _ => Self::Awaiting,
        }
    }

    /// Canonical label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Action => "Action",
            Self::Awaiting => "Awaiting",
            Self::Information => "Information",
            Self::Newsletter => "Newsletter",
            Self::Spam => "Spam",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Assigns the primary [`Category`] from content and priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorizer {
    rules: RuleSet<Category>,
}

impl Categorizer {
    /// Creates a categorizer over a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: RuleSet<Category>) -> Self {
        Self { rules }
    }

    /// Categorizes a thread given its priority score.
    #[must_use]
    pub fn categorize(&self, thread: &EmailThread, priority: u8) -> Category {
        self.categorize_input(&RuleInput::new(thread, priority))
    }

    /// Categorizes an already prepared input.
    #[must_use]
    pub fn categorize_input(&self, input: &RuleInput) -> Category {
        self.rules.evaluate(input)
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::with_rules(
            RuleSet::new(Category::Awaiting)
                .rule(Condition::body_contains(&["unsubscribe"]), Category::Newsletter)
                .rule(Condition::PriorityAtLeast(4), Category::Urgent)
                .rule(
                    Condition::subject_contains(&["meeting", "invite"]),
                    Category::Action,
                )
                .rule(Condition::subject_contains(&["update"]), Category::Information),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn thread(subject: &str, body: &str) -> EmailThread {
        EmailThread::new("t").subject(subject).body(body)
    }

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), category);
        }
        assert_eq!(Category::parse("nonsense"), Category::Awaiting);
    }

    #[test]
    fn test_unsubscribe_beats_priority() {
        let categorizer = Categorizer::default();
        let t = thread("URGENT meeting update", "Click to Unsubscribe");
        assert_eq!(categorizer.categorize(&t, 5), Category::Newsletter);
    }

    #[test]
    fn test_high_priority_is_urgent() {
        let categorizer = Categorizer::default();
        assert_eq!(
            categorizer.categorize(&thread("Meeting invite", ""), 4),
            Category::Urgent
        );
        assert_eq!(
            categorizer.categorize(&thread("Meeting invite", ""), 3),
            Category::Action
        );
    }

    #[test]
    fn test_subject_rules_in_order() {
        let categorizer = Categorizer::default();
        assert_eq!(
            categorizer.categorize(&thread("Invite: planning meeting update", ""), 1),
            Category::Action
        );
        assert_eq!(
            categorizer.categorize(&thread("Project Update", ""), 1),
            Category::Information
        );
        assert_eq!(
            categorizer.categorize(&thread("Lunch?", ""), 1),
            Category::Awaiting
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Newsletter.to_string(), "Newsletter");
        assert_eq!("urgent".parse::<Category>().unwrap(), Category::Urgent);
    }
}
