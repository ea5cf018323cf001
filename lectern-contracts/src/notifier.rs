//! Best-effort reporting port toward the progress-persistence backend.

use std::fmt::{self, Display};

use async_trait::async_trait;
use lectern_model::watch::{
    SegmentReport, SkipAttemptReport, VideoLengthReport,
};
use mockall::automock;

/// Failure raised by a notifier implementation.
///
/// Callers log these and move on; the delivery contract below makes retrying
/// the caller's choice, and the engine chooses not to.
#[derive(Debug, Clone)]
pub struct NotifyError {
    message: String,
}

impl NotifyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notify failed: {}", self.message)
    }
}

impl std::error::Error for NotifyError {}

/// Delivery port for watch-progress reports.
///
/// Delivery contract: at-most-once, unordered, no retry. A lost report is
/// recovered naturally at the next segment boundary, so implementations must
/// not block playback and the backend must tolerate gaps and reordering.
/// `report_video_length` is idempotent on the backend side and safe to send
/// repeatedly.
#[automock]
#[async_trait]
pub trait ProgressNotifier: Send + Sync {
    async fn report_segment(
        &self,
        report: SegmentReport,
    ) -> Result<(), NotifyError>;

    async fn report_skip_attempt(
        &self,
        report: SkipAttemptReport,
    ) -> Result<(), NotifyError>;

    async fn report_video_length(
        &self,
        report: VideoLengthReport,
    ) -> Result<(), NotifyError>;
}
