//! The watch-session driver.
//!
//! Owns the media surface and the notifier for the lifetime of one mounted
//! player, translates tracker effects into media calls, and dispatches
//! progress reports as fire-and-forget tasks so playback never waits on the
//! network. Dropping the session abandons in-flight reports; their results
//! are ignored.

use std::fmt;
use std::sync::Arc;

use lectern_contracts::media::MediaSurface;
use lectern_contracts::notifier::ProgressNotifier;
use lectern_model::ids::LectureKey;
use lectern_model::watch::{
    SegmentReport, SkipAttemptReport, VideoLengthReport, WatchSegment,
};

use crate::error::Result;
use crate::policy::TrackerPolicy;
use crate::tracker::{Effect, TrackerEvent, TrackerState};

/// What the embedding page knows about the lecture when mounting the player.
#[derive(Debug, Clone, Copy)]
pub struct LectureDescriptor {
    pub key: LectureKey,
    /// Resume position in seconds, 0 for a fresh start
    pub resume_position: f64,
    /// Media length in seconds if the catalog already knows it
    pub known_length: Option<f64>,
    /// Backend-confirmed completion flag
    pub completed: bool,
}

/// Invoked exactly once on natural end of stream.
pub type EndedCallback = Box<dyn FnOnce() + Send>;

/// Invoked after the backend acks a segment report, so the page can refresh
/// authoritative progress.
pub type RefetchProgress = Arc<dyn Fn() + Send + Sync>;

/// One viewing session of one lecture.
///
/// The session is the only writer of corrective seeks on the media surface,
/// which keeps user seek attempts and corrective resets from racing. Must be
/// driven from within a tokio runtime; report dispatch spawns onto it.
pub struct WatchSession<M: MediaSurface> {
    media: M,
    notifier: Arc<dyn ProgressNotifier>,
    descriptor: LectureDescriptor,
    policy: TrackerPolicy,
    state: TrackerState,
    on_ended: Option<EndedCallback>,
    refetch_progress: Option<RefetchProgress>,
}

impl<M: MediaSurface> fmt::Debug for WatchSession<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchSession")
            .field("descriptor", &self.descriptor)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<M: MediaSurface> WatchSession<M> {
    /// Mount a session: seeks the media to the resume position and seeds the
    /// tracker from the descriptor.
    pub fn new(
        mut media: M,
        notifier: Arc<dyn ProgressNotifier>,
        descriptor: LectureDescriptor,
        policy: TrackerPolicy,
        on_ended: Option<EndedCallback>,
        refetch_progress: Option<RefetchProgress>,
    ) -> Result<Self> {
        media.seek(descriptor.resume_position)?;
        let state = TrackerState::new(
            descriptor.resume_position,
            descriptor.known_length,
        );
        Ok(Self {
            media,
            notifier,
            descriptor,
            policy,
            state,
            on_ended,
            refetch_progress,
        })
    }

    /// Feed one playback event through the state machine and apply the
    /// resulting effects.
    pub fn handle_event(&mut self, event: TrackerEvent) {
        let effects = self.state.apply(event, &self.policy);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn descriptor(&self) -> &LectureDescriptor {
        &self.descriptor
    }

    pub fn policy(&self) -> &TrackerPolicy {
        &self.policy
    }

    /// Whether the locked/complete indicator should show: either the backend
    /// already confirmed completion or the local aggregate cleared the gate.
    pub fn completion_reached(&self) -> bool {
        self.descriptor.completed || self.state.completion_reached(&self.policy)
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Seek(position) => {
                if let Err(err) = self.media.seek(position) {
                    tracing::warn!(%err, position, "corrective seek failed");
                }
            }

            Effect::Play => {
                if let Err(err) = self.media.play() {
                    let reason = err.to_string();
                    self.handle_event(TrackerEvent::PlaybackRejected(reason));
                }
            }

            Effect::Pause => self.media.pause(),

            Effect::SetMuted(muted) => self.media.set_muted(muted),

            Effect::SetFullscreen(fullscreen) => {
                self.media.set_fullscreen(fullscreen)
            }

            Effect::ReportSegment(segment) => self.dispatch_segment(segment),

            Effect::ReportSkipAttempt { from_time, to_time } => {
                self.dispatch_skip_attempt(from_time, to_time)
            }

            Effect::ReportVideoLength(length) => {
                self.dispatch_video_length(length)
            }

            Effect::NotifyEnded => {
                if let Some(on_ended) = self.on_ended.take() {
                    on_ended();
                }
            }
        }
    }

    fn dispatch_segment(&self, segment: WatchSegment) {
        let report = SegmentReport {
            course_id: self.descriptor.key.course_id,
            lecture_id: self.descriptor.key.lecture_id,
            segment,
            total_watched_time: self.state.total_watched(),
            video_length: self.state.duration.unwrap_or(0.0),
        };
        let notifier = Arc::clone(&self.notifier);
        let refetch = self.refetch_progress.clone();
        tokio::spawn(async move {
            match notifier.report_segment(report).await {
                Ok(()) => {
                    if let Some(refetch) = refetch {
                        refetch();
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "segment report dropped");
                }
            }
        });
    }

    fn dispatch_skip_attempt(&self, from_time: f64, to_time: f64) {
        let report = SkipAttemptReport {
            course_id: self.descriptor.key.course_id,
            lecture_id: self.descriptor.key.lecture_id,
            from_time,
            to_time,
            occurred_at: chrono::Utc::now().timestamp(),
        };
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.report_skip_attempt(report).await {
                tracing::warn!(%err, "skip-attempt report dropped");
            }
        });
    }

    fn dispatch_video_length(&self, length: f64) {
        let report = VideoLengthReport {
            course_id: self.descriptor.key.course_id,
            lecture_id: self.descriptor.key.lecture_id,
            length,
        };
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.report_video_length(report).await {
                tracing::warn!(%err, "video-length report dropped");
            }
        });
    }
}
