//! # Lectern Core
//!
//! Core library for the Lectern e-learning platform, providing the sequential
//! watch-tracking engine: segment-based progress accounting, anti-skip
//! enforcement, and best-effort reporting toward the progress-persistence
//! backend.
//!
//! The engine is split into a pure state machine ([`tracker`]) that maps
//! playback events to state changes plus side-effect descriptions, and an
//! async driver ([`session`]) that owns the media surface and dispatches
//! reports without ever blocking playback.

pub mod error;
pub mod policy;
pub mod prelude;
pub mod session;
pub mod tracker;
pub mod watch_status;

pub use error::{Result, TrackerError};
pub use policy::TrackerPolicy;
pub use session::{LectureDescriptor, WatchSession};
pub use tracker::{Effect, TrackerEvent, TrackerNotice, TrackerState};
pub use watch_status::{CourseWatchState, InProgressLecture};
