//! Thread input and output records.
//!
//! [`EmailThread`] is what callers hand in; [`AnnotatedThread`],
//! [`TriageReport`] and [`BatchOutcome`] are what the pipeline hands back.

mod model;

pub use model::{
    AnnotatedThread, BatchOutcome, EmailThread, NO_SUBJECT, TriageReport, UNKNOWN_SENDER,
    compression_percent,
};
