//! The playback state machine.
//!
//! Exactly two playback states exist (`playing` / `idle`); transitions are
//! driven by the native media element's events and by viewer control
//! intents. Each transition is a pure function of (event, state) producing a
//! new state and a list of [`Effect`]s, so the whole machine is testable
//! without a real media element.

mod events;
mod state;
mod update;

pub use events::{Effect, TrackerEvent};
pub use state::{TrackerNotice, TrackerState};
