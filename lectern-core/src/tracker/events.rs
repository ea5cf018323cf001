use lectern_model::watch::WatchSegment;

/// Inputs to the tracker: native media-element events plus viewer control
/// intents from the embedding page.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// Playback transitioned to playing
    Play,
    /// Playback transitioned to paused
    Pause,
    /// Natural end of stream
    Ended,
    /// Periodic position report while playing, seconds
    TimeUpdate(f64),
    /// Stream metadata became available
    MetadataLoaded { duration: f64 },
    /// The element stalled waiting for data
    Waiting,
    /// The element has enough data to resume
    CanPlay,
    /// The element refused to start playback
    PlaybackRejected(String),

    // Control intents
    TogglePlayback,
    ToggleMute,
    ToggleFullscreen,
}

/// Side effects requested by a transition. The session driver applies these;
/// the state machine itself performs no I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Force the playhead to the given position (corrective seek)
    Seek(f64),
    /// Deliver a closed watch segment to the notifier
    ReportSegment(WatchSegment),
    /// Deliver a blocked-skip audit record to the notifier
    ReportSkipAttempt { from_time: f64, to_time: f64 },
    /// Deliver the media length to the notifier
    ReportVideoLength(f64),
    /// Invoke the caller's end-of-stream callback
    NotifyEnded,
    /// Ask the media surface to start playback
    Play,
    /// Ask the media surface to pause
    Pause,
    /// Mirror the mute toggle onto the media surface
    SetMuted(bool),
    /// Mirror the fullscreen toggle onto the media surface
    SetFullscreen(bool),
}
