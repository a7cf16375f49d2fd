//! Ordered first-match-wins rule tables.
//!
//! Both classification policies are expressed as data: a list of
//! `(condition, outcome)` pairs evaluated top to bottom, with a fallback
//! when nothing matches.

use serde::{Deserialize, Serialize};

use crate::thread::EmailThread;

/// A thread field that keyword conditions can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The subject line.
    Subject,
    /// The sender string.
    Sender,
    /// The body text.
    Body,
}

/// Lowercased view of a thread, prepared once and shared by every rule.
#[derive(Debug, Clone)]
pub struct RuleInput {
    subject: String,
    sender: String,
    body: String,
    priority: u8,
}

impl RuleInput {
    /// Prepares a thread for rule evaluation.
    #[must_use]
    pub fn new(thread: &EmailThread, priority: u8) -> Self {
        Self {
            subject: thread.subject.to_lowercase(),
            sender: thread.sender.to_lowercase(),
            body: thread.body.to_lowercase(),
            priority,
        }
    }

    /// Returns the same input carrying a different priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the lowercased text of a field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Subject => &self.subject,
            Field::Sender => &self.sender,
            Field::Body => &self.body,
        }
    }

    /// Priority the input was prepared with.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.priority
    }

    /// Returns true if the field contains any of the (lowercase) keywords.
    #[must_use]
    pub fn contains_any(&self, field: Field, keywords: &[String]) -> bool {
        let text = self.field(field);
        keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// A predicate over a [`RuleInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The field contains at least one keyword (case-insensitive substring).
    Contains {
        /// Field to search.
        field: Field,
        /// Lowercase keywords.
        keywords: Vec<String>,
    },
    /// Priority is at least the given value.
    PriorityAtLeast(u8),
    /// Priority equals the given value.
    PriorityEquals(u8),
    /// Any of the nested conditions holds.
    Any(Vec<Condition>),
}

impl Condition {
    /// Keyword condition on an arbitrary field. Keywords are lowercased.
    #[must_use]
    pub fn contains(field: Field, keywords: &[&str]) -> Self {
        Self::Contains {
            field,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Keyword condition on the subject.
    #[must_use]
    pub fn subject_contains(keywords: &[&str]) -> Self {
        Self::contains(Field::Subject, keywords)
    }

    /// Keyword condition on the sender.
    #[must_use]
    pub fn sender_contains(keywords: &[&str]) -> Self {
        Self::contains(Field::Sender, keywords)
    }

    /// Keyword condition on the body.
    #[must_use]
    pub fn body_contains(keywords: &[&str]) -> Self {
        Self::contains(Field::Body, keywords)
    }

    /// Evaluates the condition.
    #[must_use]
    pub fn matches(&self, input: &RuleInput) -> bool {
        match self {
            Self::Contains { field, keywords } => input.contains_any(*field, keywords),
            Self::PriorityAtLeast(min) => input.priority() >= *min,
            Self::PriorityEquals(value) => input.priority() == *value,
            Self::Any(conditions) => conditions.iter().any(|c| c.matches(input)),
        }
    }
}

/// One entry of a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<L> {
    /// When this rule applies.
    pub condition: Condition,
    /// Label produced when it does.
    pub outcome: L,
}

/// An ordered rule table with a fallback label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet<L> {
    rules: Vec<Rule<L>>,
    fallback: L,
}

impl<L: Copy> RuleSet<L> {
    /// Creates an empty table that always yields `fallback`.
    #[must_use]
    pub const fn new(fallback: L) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Appends a rule after the existing ones.
    #[must_use]
    pub fn rule(mut self, condition: Condition, outcome: L) -> Self {
        self.rules.push(Rule { condition, outcome });
        self
    }

    /// Returns the outcome of the first matching rule, or the fallback.
    #[must_use]
    pub fn evaluate(&self, input: &RuleInput) -> L {
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(input))
            .map_or(self.fallback, |rule| rule.outcome)
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule<L>] {
        &self.rules
    }

    /// Label used when no rule matches.
    #[must_use]
    pub const fn fallback(&self) -> L {
        self.fallback
    }
}
