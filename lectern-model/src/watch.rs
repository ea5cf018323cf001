//! Watch-domain types: segments of actually-played video and the payloads
//! reported to the progress-persistence backend.

use crate::error::{ModelError, Result};
use crate::ids::{CourseID, LectureID};

/// One continuous interval the viewer actually played.
///
/// Segments are closed on creation (playing -> paused/ended) and never
/// mutated afterwards. Ordering and non-negativity are enforced by the
/// constructor; minimum-length filtering is playback policy and lives with
/// the tracker, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatchSegment {
    /// Position when playback began, in seconds
    pub start_time: f64,
    /// Position when playback stopped, in seconds
    pub end_time: f64,
}

impl WatchSegment {
    pub fn new(start_time: f64, end_time: f64) -> Result<Self> {
        if start_time < 0.0 {
            return Err(ModelError::InvalidSegment(format!(
                "start_time {start_time} is negative"
            )));
        }
        if end_time < start_time {
            return Err(ModelError::InvalidSegment(format!(
                "end_time {end_time} precedes start_time {start_time}"
            )));
        }
        Ok(WatchSegment {
            start_time,
            end_time,
        })
    }

    /// Length of the segment in seconds
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Watch progress ratio, clamped to `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatchedPercent(f32);

impl WatchedPercent {
    /// Create a new watched ratio, clamping between 0.0 and 1.0
    pub fn new(ratio: f32) -> Self {
        WatchedPercent(ratio.clamp(0.0, 1.0))
    }

    /// Ratio from a position/duration pair; unknown duration counts as zero
    pub fn from_position(position: f32, duration: f32) -> Self {
        if duration <= 0.0 {
            WatchedPercent(0.0)
        } else {
            Self::new(position / duration)
        }
    }

    /// Get the progress as a ratio (0.0 to 1.0)
    pub fn as_ratio(&self) -> f32 {
        self.0
    }

    /// Get the progress as a display percentage (0.0 to 100.0)
    pub fn as_display_percent(&self) -> f32 {
        self.0 * 100.0
    }

    /// Check whether this progress clears the given completion threshold
    pub fn is_complete_at(&self, threshold: f32) -> bool {
        self.0 >= threshold
    }

    /// Check if this item has been started
    pub fn is_started(&self) -> bool {
        self.0 > 0.0
    }
}

/// Segment report sent on every pause/end boundary.
///
/// Best-effort, at-most-once: the backend must tolerate missing or
/// out-of-order reports.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentReport {
    pub course_id: CourseID,
    pub lecture_id: LectureID,
    pub segment: WatchSegment,
    /// Sum of all locally observed segment durations, in seconds
    pub total_watched_time: f64,
    /// Total media length in seconds, 0.0 when still unknown
    pub video_length: f64,
}

/// Audit record of a blocked forward seek. Purely informational.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkipAttemptReport {
    pub course_id: CourseID,
    pub lecture_id: LectureID,
    /// Last legitimate position, in seconds
    pub from_time: f64,
    /// Position the viewer attempted to jump to, in seconds
    pub to_time: f64,
    /// Unix timestamp of the attempt
    pub occurred_at: i64,
}

/// Idempotent notification of the total media length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoLengthReport {
    pub course_id: CourseID,
    pub lecture_id: LectureID,
    /// Total media length in seconds
    pub length: f64,
}
