//! Trait surfaces that describe how the tracker talks to the outside world.

pub mod media;
pub mod notifier;

/// Frequently used contract types for engine and client crates.
pub mod prelude {
    pub use super::media::{MediaError, MediaSurface, MockMediaSurface};
    pub use super::notifier::{
        MockProgressNotifier, NotifyError, ProgressNotifier,
    };
}
