//! Rule-based classification: priority scoring, categories and smart folders.
//!
//! Two independent policies live here:
//! - **Category**: the triage label (`Urgent`, `Action`, `Newsletter`, ...)
//!   attached to every annotated thread.
//! - **Smart folder**: where the thread is displayed (`Calendar`,
//!   `Finance`, `Receipts`, ...).
//!
//! Both are ordered [`RuleSet`]s evaluated first-match-wins, so a policy can
//! be inspected or replaced without touching control flow.

mod category;
mod folders;
mod priority;
mod rules;

pub use category::{Categorizer, Category};
pub use folders::{FolderLabel, SmartFolders};
pub use priority::{
    MAX_PRIORITY, MIN_PRIORITY, PriorityScorer, ScoreGroup, ScoreRule, ScoringConfig,
    clamp_priority,
};
pub use rules::{Condition, Field, Rule, RuleInput, RuleSet};
