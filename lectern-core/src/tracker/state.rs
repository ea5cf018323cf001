use std::time::{Duration, Instant};

use lectern_model::watch::WatchSegment;

use crate::policy::TrackerPolicy;

/// Transient advisory shown over the player (skip blocked, play failed).
#[derive(Debug, Clone)]
pub struct TrackerNotice {
    pub message: String,
    pub shown_at: Instant,
}

impl TrackerNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}

/// Per-session playback state, owned exclusively by one mounted player.
#[derive(Debug)]
pub struct TrackerState {
    /// Last observed playback position, fractional seconds
    pub current_time: f64,
    /// Rightmost legitimately-reached position. Non-decreasing except
    /// through resume-position initialization.
    pub last_valid_time: f64,
    /// Position when the current playback run began; None while idle
    pub segment_start: Option<f64>,
    /// Closed segments, kept only for the local percentage display
    pub watched_segments: Vec<WatchSegment>,
    /// Total media length, set once by the metadata event
    pub duration: Option<f64>,

    /// Whether the caller already knew the length when the session started
    pub(crate) length_known_upfront: bool,
    pub(crate) length_reported: bool,
    pub(crate) ended_notified: bool,

    // Mirrored control state for rendering
    pub is_playing: bool,
    pub is_muted: bool,
    pub is_fullscreen: bool,
    pub is_buffering: bool,

    /// Current transient advisory, if any
    pub notice: Option<TrackerNotice>,
}

impl TrackerState {
    /// Seed the state from a resume position and an optionally-known length.
    pub fn new(resume_position: f64, known_length: Option<f64>) -> Self {
        let known_length = known_length.filter(|len| *len > 0.0);
        Self {
            current_time: resume_position,
            last_valid_time: resume_position,
            segment_start: None,
            watched_segments: Vec::new(),
            duration: known_length,
            length_known_upfront: known_length.is_some(),
            length_reported: false,
            ended_notified: false,
            is_playing: false,
            is_muted: false,
            is_fullscreen: false,
            is_buffering: false,
            notice: None,
        }
    }

    /// Sum of all locally observed segment durations, seconds
    pub fn total_watched(&self) -> f64 {
        self.watched_segments
            .iter()
            .map(WatchSegment::duration)
            .sum()
    }

    /// Percentage watched for display, always within `[0, 100]`.
    ///
    /// Unknown duration counts as 0 rather than dividing by zero. Rewatched
    /// intervals overlap in the local list, so the sum is capped at 100.
    pub fn watched_percent(&self) -> f64 {
        match self.duration {
            Some(duration) if duration > 0.0 => {
                (100.0 * self.total_watched() / duration).min(100.0)
            }
            _ => 0.0,
        }
    }

    /// Whether the local completion gate has been reached
    pub fn completion_reached(&self, policy: &TrackerPolicy) -> bool {
        self.watched_percent() >= f64::from(policy.completion_threshold) * 100.0
    }

    /// Advisory message still inside its display window, if any
    pub fn visible_notice(&self, policy: &TrackerPolicy) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| !n.is_expired(Duration::from_secs(policy.notice_secs)))
            .map(|n| n.message.as_str())
    }
}
