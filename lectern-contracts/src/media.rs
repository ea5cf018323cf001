//! Port over the platform's native media element.
//!
//! The engine is the only writer of corrective seeks, so the surface is
//! modelled as a single-owner mutable resource: one `&mut` holder per
//! mounted player, no interior sharing.

use std::fmt::{self, Display};

use mockall::automock;

/// Failure raised by the underlying media element.
#[derive(Debug, Clone)]
pub enum MediaError {
    /// The element refused to start playback (autoplay policy, decode error)
    PlayRejected(String),
    /// A seek could not be performed
    SeekFailed(String),
}

impl Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::PlayRejected(msg) => {
                write!(f, "playback start rejected: {msg}")
            }
            MediaError::SeekFailed(msg) => write!(f, "seek failed: {msg}"),
        }
    }
}

impl std::error::Error for MediaError {}

/// The subset of the native media element the tracker drives.
///
/// Implementations wrap whatever the embedding toolkit exposes; the engine
/// never touches the element behind the implementor's back.
#[automock]
pub trait MediaSurface: Send {
    /// Current playback position in seconds
    fn position(&self) -> f64;

    /// Begin or resume playback
    fn play(&mut self) -> Result<(), MediaError>;

    /// Suspend playback, keeping the current position
    fn pause(&mut self);

    /// Move the playhead to `position_secs`
    fn seek(&mut self, position_secs: f64) -> Result<(), MediaError>;

    /// Mute or unmute audio
    fn set_muted(&mut self, muted: bool);

    /// Enter or leave fullscreen presentation
    fn set_fullscreen(&mut self, fullscreen: bool);
}
