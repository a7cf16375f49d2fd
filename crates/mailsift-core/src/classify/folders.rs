//! Smart folders: the display-folder classification.
//!
//! This is a separate policy from [`Category`](super::Category). The two
//! overlap (both know about urgency and newsletters) but answer different
//! questions: the category drives triage, the folder drives where the
//! thread is shown.

use serde::{Deserialize, Serialize};

use super::rules::{Condition, RuleInput, RuleSet};
use crate::thread::EmailThread;

/// Folder a thread is filed under for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FolderLabel {
    /// Top priority threads.
    Urgent,
    /// Meetings and scheduling.
    Calendar,
    /// Invoices and payments.
    Finance,
    /// Newsletters and other bulk mail.
    Newsletters,
    /// Purchase receipts.
    Receipts,
    /// Updates on things in flight.
    Awaiting,
    /// Everything else.
    #[default]
    Inbox,
}

impl FolderLabel {
    /// All folders in display order.
    pub const ALL: [Self; 7] = [
        Self::Urgent,
        Self::Calendar,
        Self::Finance,
        Self::Newsletters,
        Self::Receipts,
        Self::Awaiting,
        Self::Inbox,
    ];

    /// Parse from string representation. Unknown labels map to `Inbox`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Self::Urgent,
            "calendar" => Self::Calendar,
            "finance" => Self::Finance,
            "newsletters" => Self::Newsletters,
            "receipts" => Self::Receipts,
            "awaiting" => Self::Awaiting,
            _ => Self::Inbox,
        }
    }

    /// Canonical label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Calendar => "Calendar",
            Self::Finance => "Finance",
            Self::Newsletters => "Newsletters",
            Self::Receipts => "Receipts",
            Self::Awaiting => "Awaiting",
            Self::Inbox => "Inbox",
        }
    }
}

impl std::fmt::Display for FolderLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FolderLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Assigns a [`FolderLabel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartFolders {
    rules: RuleSet<FolderLabel>,
}

impl SmartFolders {
    /// Creates a folder policy over a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: RuleSet<FolderLabel>) -> Self {
        Self { rules }
    }

    /// Picks the folder for a thread given its priority score.
    #[must_use]
    pub fn folder_for(&self, thread: &EmailThread, priority: u8) -> FolderLabel {
        self.folder_for_input(&RuleInput::new(thread, priority))
    }

    /// Picks the folder for an already prepared input.
    #[must_use]
    pub fn folder_for_input(&self, input: &RuleInput) -> FolderLabel {
        self.rules.evaluate(input)
    }
}

impl Default for SmartFolders {
    fn default() -> Self {
        Self::with_rules(
            RuleSet::new(FolderLabel::Inbox)
                .rule(Condition::PriorityEquals(5), FolderLabel::Urgent)
                .rule(Condition::subject_contains(&["meeting"]), FolderLabel::Calendar)
                .rule(
                    Condition::subject_contains(&["invoice", "payment"]),
                    FolderLabel::Finance,
                )
                .rule(
                    Condition::Any(vec![
                        Condition::subject_contains(&["newsletter"]),
                        Condition::body_contains(&["unsubscribe"]),
                    ]),
                    FolderLabel::Newsletters,
                )
                .rule(Condition::subject_contains(&["receipt"]), FolderLabel::Receipts)
                .rule(Condition::subject_contains(&["update"]), FolderLabel::Awaiting),
        )
    }
}
