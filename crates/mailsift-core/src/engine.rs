//! The triage engine: one configured instance of every pipeline stage.

use std::sync::Arc;

use tracing::{debug, info};

use crate::Result;
use crate::annotate::ThreadAnnotator;
use crate::classify::{FolderLabel, SmartFolders};
use crate::config::TriageConfig;
use crate::rank::rank;
use crate::signals::{MeetingDetector, MeetingSignal, UnsubscribeDetector, UnsubscribeSignal};
use crate::thread::{AnnotatedThread, BatchOutcome, EmailThread, TriageReport};
use crate::volume::{VolumeStats, VolumeTracker};

/// Entry point for callers.
///
/// Every operation except [`record_volume`](Self::record_volume) is pure.
/// Clones share the same [`VolumeTracker`].
///
/// # Example
///
/// ```
/// use mailsift_core::{EmailThread, TriageConfig, TriageEngine};
///
/// let engine = TriageEngine::new(TriageConfig::default())?;
/// let thread = EmailThread::new("1")
///     .subject("URGENT: Deadline Friday")
///     .sender("boss@company.com")
///     .body("Please review and approve.");
///
/// let annotated = engine.annotate(&thread);
/// assert_eq!(annotated.priority, 5);
/// # Ok::<(), mailsift_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TriageEngine {
    annotator: ThreadAnnotator,
    folders: SmartFolders,
    meetings: MeetingDetector,
    unsubscribe: UnsubscribeDetector,
    tracker: Arc<VolumeTracker>,
}

impl TriageEngine {
    /// Creates an engine with its own volume tracker.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a detection
    /// pattern fails to compile.
    pub fn new(config: TriageConfig) -> Result<Self> {
        let tracker = Arc::new(VolumeTracker::with_minutes_per_thread(
            config.minutes_saved_per_thread,
        ));
        Self::with_tracker(config, tracker)
    }

    /// Creates an engine that records into a shared tracker.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a detection
    /// pattern fails to compile.
    pub fn with_tracker(config: TriageConfig, tracker: Arc<VolumeTracker>) -> Result<Self> {
        config.validate()?;
        let engine = Self {
            annotator: ThreadAnnotator::new(&config),
            folders: SmartFolders::default(),
            meetings: MeetingDetector::new(&config.meeting)?,
            unsubscribe: UnsubscribeDetector::new(&config.unsubscribe),
            tracker,
        };
        debug!(
            summary_max_chars = config.summary_max_chars,
            score_groups = config.scoring.groups.len(),
            "triage engine ready"
        );
        Ok(engine)
    }

    /// Annotates a single thread.
    #[must_use]
    pub fn annotate(&self, thread: &EmailThread) -> AnnotatedThread {
        self.annotator.annotate(thread)
    }

    /// Annotates each thread, preserving input order.
    #[must_use]
    pub fn annotate_batch(&self, threads: &[EmailThread]) -> Vec<AnnotatedThread> {
        self.annotator.annotate_batch(threads)
    }

    /// Sorts annotated threads by priority, then date, descending.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn rank(&self, annotated: Vec<AnnotatedThread>) -> Vec<AnnotatedThread> {
        rank(annotated)
    }

    /// Picks the display folder for a thread.
    #[must_use]
    pub fn folder_for(&self, thread: &EmailThread, priority: u8) -> FolderLabel {
        self.folders.folder_for(thread, priority)
    }

    /// Scans text for meeting cues.
    #[must_use]
    pub fn detect_meeting(&self, text: &str) -> MeetingSignal {
        self.meetings.detect(text)
    }

    /// Scans text for unsubscribe cues.
    #[must_use]
    pub fn detect_unsubscribe(&self, text: &str) -> UnsubscribeSignal {
        self.unsubscribe.detect(text)
    }

    /// Adds `count` processed threads to the volume counters.
    pub fn record_volume(&self, count: u64) {
        self.tracker.track(count);
    }

    /// Reads the volume counters.
    #[must_use]
    pub fn read_volume(&self) -> VolumeStats {
        self.tracker.stats()
    }

    /// The shared volume tracker.
    #[must_use]
    pub fn tracker(&self) -> Arc<VolumeTracker> {
        Arc::clone(&self.tracker)
    }

    /// Annotates a thread and attaches folder, meeting and unsubscribe signals.
    #[must_use]
    pub fn triage(&self, thread: &EmailThread) -> TriageReport {
        let annotated = self.annotate(thread);
        let smart_folder = self.folder_for(thread, annotated.priority);
        TriageReport {
            smart_folder,
            meeting_info: self.detect_meeting(&thread.body),
            unsubscribe_info: self.detect_unsubscribe(&thread.body),
            thread: annotated,
        }
    }

    /// Annotates and ranks a batch, then records its size.
    #[must_use]
    pub fn process_batch(&self, threads: &[EmailThread]) -> BatchOutcome {
        let results = self.rank(self.annotate_batch(threads));
        self.record_volume(threads.len() as u64);

        let average = average_percent(&results);
        info!(
            processed = results.len(),
            average_compression = average,
            "processed batch"
        );

        BatchOutcome {
            processed_count: results.len(),
            average_compression: format!("{average}%"),
            results,
        }
    }
}

/// Mean of the per-thread compression percentages, `0` for no threads.
#[allow(clippy::cast_possible_truncation)]
fn average_percent(threads: &[AnnotatedThread]) -> u8 {
    if threads.is_empty() {
        return 0;
    }
    let total: u64 = threads
        .iter()
        .map(|t| u64::from(t.compression_percent()))
        .sum();
    // Each term is at most 100, so the mean is too.
    (total / threads.len() as u64) as u8
}
