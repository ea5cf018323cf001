use lectern_model::watch::WatchSegment;

use super::events::{Effect, TrackerEvent};
use super::state::{TrackerNotice, TrackerState};
use crate::policy::TrackerPolicy;

impl TrackerState {
    /// Handle one playback event and return the side effects to apply.
    pub fn apply(
        &mut self,
        event: TrackerEvent,
        policy: &TrackerPolicy,
    ) -> Vec<Effect> {
        match event {
            TrackerEvent::Play => {
                self.is_playing = true;
                self.segment_start = Some(self.current_time);
                Vec::new()
            }

            TrackerEvent::Pause => {
                self.is_playing = false;
                self.close_segment(policy)
            }

            TrackerEvent::Ended => {
                self.is_playing = false;
                let mut effects = self.close_segment(policy);
                if !self.ended_notified {
                    self.ended_notified = true;
                    effects.push(Effect::NotifyEnded);
                }
                effects
            }

            TrackerEvent::TimeUpdate(raw_position) => {
                self.on_time_update(raw_position, policy)
            }

            TrackerEvent::MetadataLoaded { duration } => {
                self.on_metadata_loaded(duration)
            }

            TrackerEvent::Waiting => {
                self.is_buffering = true;
                Vec::new()
            }

            TrackerEvent::CanPlay => {
                self.is_buffering = false;
                Vec::new()
            }

            TrackerEvent::PlaybackRejected(reason) => {
                tracing::warn!(%reason, "media element rejected playback");
                self.is_playing = false;
                self.notice = Some(TrackerNotice::new("Failed to play video"));
                Vec::new()
            }

            TrackerEvent::TogglePlayback => {
                if self.is_playing {
                    vec![Effect::Pause]
                } else {
                    vec![Effect::Play]
                }
            }

            TrackerEvent::ToggleMute => {
                self.is_muted = !self.is_muted;
                vec![Effect::SetMuted(self.is_muted)]
            }

            TrackerEvent::ToggleFullscreen => {
                self.is_fullscreen = !self.is_fullscreen;
                vec![Effect::SetFullscreen(self.is_fullscreen)]
            }
        }
    }

    /// Gate a periodic position report against the skip tolerance.
    ///
    /// Positions are compared on whole seconds so sub-second jitter from the
    /// media element never trips the gate; `current_time` keeps the
    /// fractional position for exact segment boundaries.
    fn on_time_update(
        &mut self,
        raw_position: f64,
        policy: &TrackerPolicy,
    ) -> Vec<Effect> {
        let mut observed = raw_position;
        if let Some(duration) = self.duration {
            observed = observed.min(duration);
        }
        let position = observed.floor();

        if position > self.last_valid_time + policy.skip_tolerance_secs {
            // Illegal forward seek: snap back, leave last_valid_time alone.
            self.current_time = self.last_valid_time;
            self.notice = Some(TrackerNotice::new(
                "Skipping ahead is disabled for this lecture",
            ));
            tracing::debug!(
                from = self.last_valid_time,
                to = position,
                "blocked forward seek"
            );
            return vec![
                Effect::Seek(self.last_valid_time),
                Effect::ReportSkipAttempt {
                    from_time: self.last_valid_time,
                    to_time: position,
                },
            ];
        }

        self.current_time = observed;
        if position > self.last_valid_time {
            self.last_valid_time = position;
        }
        Vec::new()
    }

    fn on_metadata_loaded(&mut self, duration: f64) -> Vec<Effect> {
        if self.duration.is_none() && duration > 0.0 {
            self.duration = Some(duration);
        }

        // The backend dedups length reports, but there is no point sending
        // one when the caller already knew the length.
        if self.length_known_upfront || self.length_reported {
            return Vec::new();
        }
        match self.duration {
            Some(known) => {
                self.length_reported = true;
                vec![Effect::ReportVideoLength(known)]
            }
            None => Vec::new(),
        }
    }

    /// Close the open segment, keeping it only if it is long enough to be a
    /// real watch and not inverted by an intervening backward seek.
    fn close_segment(&mut self, policy: &TrackerPolicy) -> Vec<Effect> {
        let Some(start) = self.segment_start.take() else {
            return Vec::new();
        };
        let end = self.current_time;
        if end - start < policy.min_segment_secs {
            tracing::debug!(start, end, "discarding short segment");
            return Vec::new();
        }
        match WatchSegment::new(start, end) {
            Ok(segment) => {
                self.watched_segments.push(segment);
                vec![Effect::ReportSegment(segment)]
            }
            Err(err) => {
                tracing::debug!(%err, "discarding malformed segment");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> TrackerPolicy {
        TrackerPolicy::default()
    }

    fn drive(state: &mut TrackerState, positions: &[f64]) {
        for &p in positions {
            let effects = state.apply(TrackerEvent::TimeUpdate(p), &policy());
            assert!(effects.is_empty(), "unexpected effects at {p}");
        }
    }

    #[test]
    fn last_valid_time_is_non_decreasing() {
        let mut state = TrackerState::new(0.0, Some(600.0));
        drive(&mut state, &[5.0, 10.0, 7.0, 12.0]);
        assert_eq!(state.last_valid_time, 12.0);

        // Backward seek is allowed but never lowers the confirmed position
        drive(&mut state, &[3.0]);
        assert_eq!(state.last_valid_time, 12.0);
        assert_eq!(state.current_time, 3.0);
    }

    #[test]
    fn forward_seek_past_tolerance_is_corrected() {
        let mut state = TrackerState::new(0.0, Some(600.0));
        drive(&mut state, &[5.0]);

        let effects =
            state.apply(TrackerEvent::TimeUpdate(40.0), &policy());
        assert_eq!(
            effects,
            vec![
                Effect::Seek(5.0),
                Effect::ReportSkipAttempt {
                    from_time: 5.0,
                    to_time: 40.0
                },
            ]
        );
        assert_eq!(state.current_time, 5.0);
        assert_eq!(state.last_valid_time, 5.0);
        assert!(state.visible_notice(&policy()).is_some());
    }

    #[test]
    fn position_within_tolerance_is_accepted() {
        let mut state = TrackerState::new(0.0, Some(600.0));
        // Exactly at the tolerance bound: not an overshoot
        let effects =
            state.apply(TrackerEvent::TimeUpdate(10.0), &policy());
        assert!(effects.is_empty());
        assert_eq!(state.last_valid_time, 10.0);
    }

    #[test]
    fn pause_emits_exactly_one_segment_when_long_enough() {
        let mut state = TrackerState::new(0.0, Some(600.0));
        state.apply(TrackerEvent::Play, &policy());
        drive(&mut state, &[3.0, 6.0]);

        let effects = state.apply(TrackerEvent::Pause, &policy());
        assert_eq!(
            effects,
            vec![Effect::ReportSegment(
                WatchSegment::new(0.0, 6.0).unwrap()
            )]
        );
        assert_eq!(state.watched_segments.len(), 1);
        assert!(state.segment_start.is_none());
    }

    #[test]
    fn short_runs_are_discarded_and_not_counted() {
        let mut state = TrackerState::new(0.0, Some(600.0));

        state.apply(TrackerEvent::Play, &policy());
        drive(&mut state, &[1.5]);
        let effects = state.apply(TrackerEvent::Pause, &policy());
        assert!(effects.is_empty());
        assert!(state.watched_segments.is_empty());

        // Resuming from the same spot produces a fresh segment with the
        // fractional boundary intact
        state.apply(TrackerEvent::Play, &policy());
        drive(&mut state, &[5.0, 10.0]);
        let effects = state.apply(TrackerEvent::Pause, &policy());
        let expected = WatchSegment::new(1.5, 10.0).unwrap();
        assert_eq!(effects, vec![Effect::ReportSegment(expected)]);
        assert_eq!(state.watched_segments[0].duration(), 8.5);
    }

    #[test]
    fn resume_then_overshoot_reports_the_attempt() {
        let mut state = TrackerState::new(120.0, Some(600.0));
        assert_eq!(state.last_valid_time, 120.0);

        // Natural playback advances the confirmed position
        drive(&mut state, &[125.0, 130.0, 135.0]);
        assert_eq!(state.last_valid_time, 135.0);

        let effects =
            state.apply(TrackerEvent::TimeUpdate(200.0), &policy());
        assert_eq!(
            effects,
            vec![
                Effect::Seek(135.0),
                Effect::ReportSkipAttempt {
                    from_time: 135.0,
                    to_time: 200.0
                },
            ]
        );
        assert_eq!(state.current_time, 135.0);
    }

    #[test]
    fn ended_closes_segment_then_notifies_once() {
        let mut state = TrackerState::new(585.0, Some(600.0));
        drive(&mut state, &[590.0]);
        state.apply(TrackerEvent::Play, &policy());
        drive(&mut state, &[595.0, 600.0]);

        let effects = state.apply(TrackerEvent::Ended, &policy());
        assert_eq!(
            effects,
            vec![
                Effect::ReportSegment(
                    WatchSegment::new(590.0, 600.0).unwrap()
                ),
                Effect::NotifyEnded,
            ]
        );

        // A second ended event must not notify again
        let effects = state.apply(TrackerEvent::Ended, &policy());
        assert!(effects.is_empty());
    }

    #[test]
    fn metadata_reports_length_once_when_unknown() {
        let mut state = TrackerState::new(0.0, None);
        let effects = state
            .apply(TrackerEvent::MetadataLoaded { duration: 600.0 }, &policy());
        assert_eq!(effects, vec![Effect::ReportVideoLength(600.0)]);
        assert_eq!(state.duration, Some(600.0));

        // Repeated metadata events change nothing
        let effects = state
            .apply(TrackerEvent::MetadataLoaded { duration: 480.0 }, &policy());
        assert!(effects.is_empty());
        assert_eq!(state.duration, Some(600.0));
    }

    #[test]
    fn metadata_stays_silent_when_length_known_upfront() {
        let mut state = TrackerState::new(0.0, Some(600.0));
        let effects = state
            .apply(TrackerEvent::MetadataLoaded { duration: 600.0 }, &policy());
        assert!(effects.is_empty());
    }

    #[test]
    fn watched_percent_is_bounded() {
        let mut state = TrackerState::new(0.0, None);
        assert_eq!(state.watched_percent(), 0.0);

        state.apply(TrackerEvent::MetadataLoaded { duration: 100.0 }, &policy());
        state.apply(TrackerEvent::Play, &policy());
        drive(&mut state, &[9.0, 18.0, 27.0, 36.0, 45.0]);
        state.apply(TrackerEvent::Pause, &policy());
        assert_eq!(state.watched_percent(), 45.0);

        // Rewatching overlaps segments; display caps at 100
        for _ in 0..3 {
            drive(&mut state, &[0.0]);
            state.apply(TrackerEvent::Play, &policy());
            drive(&mut state, &[9.0, 18.0, 27.0, 36.0, 45.0]);
            state.apply(TrackerEvent::Pause, &policy());
        }
        assert_eq!(state.watched_percent(), 100.0);
        assert!(state.completion_reached(&policy()));
    }

    #[test]
    fn backward_seek_inverting_the_run_drops_the_segment() {
        let mut state = TrackerState::new(50.0, Some(600.0));
        state.apply(TrackerEvent::Play, &policy());
        drive(&mut state, &[55.0, 20.0]);

        let effects = state.apply(TrackerEvent::Pause, &policy());
        assert!(effects.is_empty());
        assert!(state.watched_segments.is_empty());
    }

    #[test]
    fn buffering_flag_follows_waiting_and_canplay() {
        let mut state = TrackerState::new(0.0, None);
        state.apply(TrackerEvent::Waiting, &policy());
        assert!(state.is_buffering);
        state.apply(TrackerEvent::CanPlay, &policy());
        assert!(!state.is_buffering);
    }

    #[test]
    fn control_toggles_mirror_and_delegate() {
        let mut state = TrackerState::new(0.0, None);

        assert_eq!(
            state.apply(TrackerEvent::TogglePlayback, &policy()),
            vec![Effect::Play]
        );
        state.apply(TrackerEvent::Play, &policy());
        assert_eq!(
            state.apply(TrackerEvent::TogglePlayback, &policy()),
            vec![Effect::Pause]
        );

        assert_eq!(
            state.apply(TrackerEvent::ToggleMute, &policy()),
            vec![Effect::SetMuted(true)]
        );
        assert!(state.is_muted);

        assert_eq!(
            state.apply(TrackerEvent::ToggleFullscreen, &policy()),
            vec![Effect::SetFullscreen(true)]
        );
        assert!(state.is_fullscreen);
    }

    #[test]
    fn playback_rejection_leaves_state_paused_with_notice() {
        let mut state = TrackerState::new(0.0, None);
        let effects = state.apply(
            TrackerEvent::PlaybackRejected("autoplay blocked".into()),
            &policy(),
        );
        assert!(effects.is_empty());
        assert!(!state.is_playing);
        assert_eq!(
            state.visible_notice(&policy()),
            Some("Failed to play video")
        );
    }
}
