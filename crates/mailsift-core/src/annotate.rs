//! Per-thread annotation: compress, score, categorize.

use tracing::debug;

use crate::classify::{Categorizer, MIN_PRIORITY, PriorityScorer, RuleInput};
use crate::compress::{Compressor, truncate_summary};
use crate::config::TriageConfig;
use crate::thread::{AnnotatedThread, EmailThread, compression_percent};

/// Runs a thread through the compressor, priority scorer and categorizer.
#[derive(Debug, Clone)]
pub struct ThreadAnnotator {
    compressor: Compressor,
    scorer: PriorityScorer,
    categorizer: Categorizer,
    summary_max_chars: usize,
}

impl ThreadAnnotator {
    /// Builds an annotator from configuration.
    #[must_use]
    pub fn new(config: &TriageConfig) -> Self {
        Self::from_parts(
            Compressor::new(config.compressor.clone()),
            PriorityScorer::new(&config.scoring),
            Categorizer::default(),
            config.summary_max_chars,
        )
    }

    /// Builds an annotator from individual components.
    #[must_use]
    pub const fn from_parts(
        compressor: Compressor,
        scorer: PriorityScorer,
        categorizer: Categorizer,
        summary_max_chars: usize,
    ) -> Self {
        Self {
            compressor,
            scorer,
            categorizer,
            summary_max_chars,
        }
    }

    /// Annotates one thread.
    #[must_use]
    pub fn annotate(&self, thread: &EmailThread) -> AnnotatedThread {
        let compressed = self.compressor.compress(&thread.body);

        let input = RuleInput::new(thread, MIN_PRIORITY);
        let priority = self.scorer.score_input(&input);
        let category = self
            .categorizer
            .categorize_input(&input.with_priority(priority));

        let original_length = thread.body.chars().count();
        let compressed_length = compressed.chars().count();
        let ratio = compression_percent(original_length, compressed_length);

        debug!(
            id = %thread.id,
            priority,
            category = category.as_str(),
            ratio,
            "annotated thread"
        );

        AnnotatedThread {
            id: thread.id.clone(),
            subject: thread.display_subject().to_string(),
            sender: thread.display_sender().to_string(),
            date: thread.date.clone(),
            priority,
            category,
            summary: truncate_summary(&compressed, self.summary_max_chars),
            original_length,
            compressed_length,
            compression_ratio: format!("{ratio}%"),
        }
    }

    /// Annotates each thread, preserving input order.
    #[must_use]
    pub fn annotate_batch(&self, threads: &[EmailThread]) -> Vec<AnnotatedThread> {
        threads.iter().map(|thread| self.annotate(thread)).collect()
    }
}

impl Default for ThreadAnnotator {
    fn default() -> Self {
        Self::new(&TriageConfig::default())
    }
}
