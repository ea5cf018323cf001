//! Core data model definitions shared across Lectern crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod prelude;
pub mod watch;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CourseID, LectureID, LectureKey};
pub use watch::{
    SegmentReport, SkipAttemptReport, VideoLengthReport, WatchSegment,
    WatchedPercent,
};
