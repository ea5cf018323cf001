//! Frequently used model types for downstream crates.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::ids::{CourseID, LectureID, LectureKey};
pub use crate::watch::{
    SegmentReport, SkipAttemptReport, VideoLengthReport, WatchSegment,
    WatchedPercent,
};
