//! Auxiliary text signals, independent of annotation.

mod meeting;
mod unsubscribe;

pub use meeting::{MeetingConfig, MeetingDetector, MeetingSignal};
pub use unsubscribe::{
    DEFAULT_UNSUBSCRIBE_LINK, UnsubscribeConfig, UnsubscribeDetector, UnsubscribeSignal,
};
