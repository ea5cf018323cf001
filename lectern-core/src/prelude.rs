//! Frequently used engine types for embedding crates.

pub use crate::error::{Result, TrackerError};
pub use crate::policy::TrackerPolicy;
pub use crate::session::{
    EndedCallback, LectureDescriptor, RefetchProgress, WatchSession,
};
pub use crate::tracker::{Effect, TrackerEvent, TrackerNotice, TrackerState};
pub use crate::watch_status::{CourseWatchState, InProgressLecture};
pub use lectern_contracts::prelude::*;
pub use lectern_model::prelude::*;
