use serde::{Deserialize, Serialize};

/// Playback-policy constants for the watch tracker. Use these to tune how
/// far ahead of the confirmed position a viewer may land before the seek is
/// rejected, and how much continuous playback counts as real watching.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerPolicy {
    /// Seconds a new position may exceed the last confirmed position before
    /// the seek is treated as an illegal skip. Large enough to absorb
    /// buffering and rounding jitter; small enough that skipping ahead is
    /// never meaningful.
    pub skip_tolerance_secs: f64,
    /// Minimum continuous playback (seconds) for a segment to count.
    /// Anything shorter is treated as noise, e.g. an accidental tap.
    pub min_segment_secs: f64,
    /// Watched ratio at which the lecture surfaces as complete. The backend
    /// owns the completion state of record; this only gates the local
    /// indicator.
    pub completion_threshold: f32,
    /// How long (seconds) transient advisory notices stay on screen.
    pub notice_secs: u64,
}

impl Default for TrackerPolicy {
    fn default() -> Self {
        Self {
            skip_tolerance_secs: 10.0,
            min_segment_secs: 2.0,
            completion_threshold: 0.95,
            notice_secs: 3,
        }
    }
}
