//! # mailsift-core
//!
//! Rule-based email thread triage.
//!
//! This crate provides:
//! - **Compression** - strips quoted replies and signatures, keeps the gist
//! - **Priority scoring** - weighted keyword heuristic mapped onto 1-5
//! - **Categorization** - primary triage label and a separate smart-folder label
//! - **Signals** - meeting (dates, times, keywords) and unsubscribe detection
//! - **Ranking** - stable priority/date ordering of a batch
//! - **Volume tracking** - thread-safe running totals of processed threads
//!
//! Everything is deterministic; no natural-language processing or learned
//! models are involved, and nothing is persisted.
//!
//! ## Example
//!
//! ```
//! use mailsift_core::{Category, EmailThread, TriageConfig, TriageEngine};
//!
//! let engine = TriageEngine::new(TriageConfig::default())?;
//! let threads = vec![
//!     EmailThread::new("1").subject("Weekly Newsletter").body("... unsubscribe here ..."),
//!     EmailThread::new("2").subject("ASAP: contract").sender("client@corp.com"),
//! ];
//!
//! let outcome = engine.process_batch(&threads);
//! assert_eq!(outcome.results[0].id, "2");
//! assert_eq!(outcome.results[1].category, Category::Newsletter);
//! assert_eq!(engine.read_volume().processed_total, 2);
//! # Ok::<(), mailsift_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod annotate;
pub mod classify;
pub mod compress;
pub mod config;
mod engine;
mod error;
pub mod rank;
pub mod signals;
pub mod thread;
pub mod volume;

pub use annotate::ThreadAnnotator;
pub use classify::{
    Categorizer, Category, FolderLabel, MAX_PRIORITY, MIN_PRIORITY, PriorityScorer, SmartFolders,
};
pub use compress::{Compressor, compress};
pub use config::{TriageConfig, TriageConfigBuilder};
pub use engine::TriageEngine;
pub use error::{Error, Result};
pub use rank::rank;
pub use signals::{MeetingDetector, MeetingSignal, UnsubscribeDetector, UnsubscribeSignal};
pub use thread::{AnnotatedThread, BatchOutcome, EmailThread, TriageReport};
pub use volume::{VolumeStats, VolumeTracker};
