//! Course watch status and progress tracking
//!
//! This module provides the consumer-side view of a user's progress across
//! the lectures of one course. It mirrors what the backend reports and
//! enables "continue watching" and completed-badge displays.
//!
//! ## Key Concepts
//!
//! - **In Progress**: Lectures currently being watched (below the
//!   completion threshold)
//! - **Completed**: Lectures watched past the completion threshold
//!
//! The backend remains the source of truth; this state is refreshed through
//! the embedding page's `refetch_progress` hook after acked reports.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    collections::{HashMap, HashSet},
    hash::{Hash, Hasher},
};

use lectern_model::ids::LectureID;
use lectern_model::watch::WatchedPercent;

/// A user's watch state across one course
///
/// Maintains two collections:
/// - `in_progress`: lectures with partial progress
/// - `completed`: set of finished lectures for O(1) badge lookup
///
/// `update_progress` moves lectures between the two based on the
/// configured completion threshold.
#[derive(Debug, Clone, Default)]
pub struct CourseWatchState {
    /// Lectures with partial progress, keyed by lecture
    pub in_progress: HashMap<LectureID, InProgressLecture>,

    /// Set of completed lecture IDs
    pub completed: HashSet<LectureID>,
}

// Serialize the map as a plain list; LectureID keys are not valid JSON
// object keys.
impl Serialize for CourseWatchState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let in_progress_vec: Vec<&InProgressLecture> =
            self.in_progress.values().collect();

        let mut state = serializer.serialize_struct("CourseWatchState", 2)?;
        state.serialize_field("in_progress", &in_progress_vec)?;
        state.serialize_field("completed", &self.completed)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for CourseWatchState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        struct CourseWatchStateHelper {
            in_progress: Vec<InProgressLecture>,
            completed: Vec<LectureID>,
        }

        let helper = CourseWatchStateHelper::deserialize(deserializer)?;

        let mut in_progress_map = HashMap::new();
        for item in helper.in_progress {
            in_progress_map.insert(item.lecture_id, item);
        }

        Ok(CourseWatchState {
            in_progress: in_progress_map,
            completed: helper.completed.into_iter().collect(),
        })
    }
}

/// Lecture currently being watched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InProgressLecture {
    /// The lecture being watched
    pub lecture_id: LectureID,
    /// Current resume position in seconds
    pub position: f32,
    /// Total lecture duration in seconds
    pub duration: f32,
    /// Unix timestamp of last update
    pub last_watched: i64,
}

impl Eq for InProgressLecture {}

impl PartialEq for InProgressLecture {
    fn eq(&self, other: &Self) -> bool {
        self.lecture_id == other.lecture_id
    }
}

impl Hash for InProgressLecture {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lecture_id.hash(state);
    }
}

impl InProgressLecture {
    pub fn watched_percent(&self) -> WatchedPercent {
        WatchedPercent::from_position(self.position, self.duration)
    }
}

impl CourseWatchState {
    /// Create a new empty watch state
    pub fn new() -> Self {
        Self::default()
    }

    /// Update progress for a lecture, moving it to `completed` once it
    /// clears `completion_threshold`.
    pub fn update_progress(
        &mut self,
        lecture_id: LectureID,
        position: f32,
        duration: f32,
        completion_threshold: f32,
    ) -> InProgressLecture {
        let percent = WatchedPercent::from_position(position, duration);
        let entry = InProgressLecture {
            lecture_id,
            position,
            duration,
            last_watched: chrono::Utc::now().timestamp(),
        };

        if percent.is_complete_at(completion_threshold) {
            self.in_progress.remove(&lecture_id);
            self.completed.insert(lecture_id);
        } else if percent.is_started() {
            if let Some(item) = self.in_progress.get_mut(&lecture_id) {
                item.position = position;
                item.duration = duration;
                item.last_watched = entry.last_watched;
            } else {
                self.in_progress.insert(lecture_id, entry.clone());
            }
        }
        entry
    }

    /// Check if a lecture is completed
    pub fn is_completed(&self, lecture_id: &LectureID) -> bool {
        self.completed.contains(lecture_id)
    }

    /// Get progress for a specific lecture; completed lectures report 1.0,
    /// unknown lectures 0.0.
    pub fn get_progress(&self, lecture_id: &LectureID) -> WatchedPercent {
        if self.completed.contains(lecture_id) {
            WatchedPercent::new(1.0)
        } else if let Some(item) = self.in_progress.get(lecture_id) {
            item.watched_percent()
        } else {
            WatchedPercent::new(0.0)
        }
    }

    /// Get continue-watching candidates, most recently watched first
    pub fn continue_watching(&self, limit: usize) -> Vec<InProgressLecture> {
        let mut items: Vec<InProgressLecture> =
            self.in_progress.values().cloned().collect();
        items.sort_by(|a, b| b.last_watched.cmp(&a.last_watched));
        items.truncate(limit);
        items
    }

    /// Clear watch progress for a specific lecture
    pub fn clear_progress(&mut self, lecture_id: &LectureID) {
        self.in_progress.remove(lecture_id);
        self.completed.remove(lecture_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.95;

    #[test]
    fn update_progress_new_lecture() {
        let mut state = CourseWatchState::new();
        let lecture = LectureID::new();

        state.update_progress(lecture, 300.0, 7200.0, THRESHOLD);

        assert_eq!(state.in_progress.len(), 1);
        let item = &state.in_progress[&lecture];
        assert_eq!(item.position, 300.0);
        assert_eq!(item.duration, 7200.0);
        assert!(item.last_watched > 0);
    }

    #[test]
    fn update_progress_existing_lecture() {
        let mut state = CourseWatchState::new();
        let lecture = LectureID::new();

        state.update_progress(lecture, 300.0, 7200.0, THRESHOLD);
        state.update_progress(lecture, 600.0, 7200.0, THRESHOLD);

        assert_eq!(state.in_progress.len(), 1);
        assert_eq!(state.in_progress[&lecture].position, 600.0);
    }

    #[test]
    fn progress_past_threshold_moves_to_completed() {
        let mut state = CourseWatchState::new();
        let lecture = LectureID::new();

        state.update_progress(lecture, 3600.0, 7200.0, THRESHOLD);
        assert!(!state.is_completed(&lecture));

        state.update_progress(lecture, 6900.0, 7200.0, THRESHOLD);
        assert!(state.is_completed(&lecture));
        assert!(state.in_progress.is_empty());
        assert_eq!(state.get_progress(&lecture).as_ratio(), 1.0);
    }

    #[test]
    fn zero_position_does_not_create_an_entry() {
        let mut state = CourseWatchState::new();
        let lecture = LectureID::new();

        state.update_progress(lecture, 0.0, 7200.0, THRESHOLD);
        assert!(state.in_progress.is_empty());
        assert!(state.completed.is_empty());
    }

    #[test]
    fn continue_watching_orders_by_recency() {
        let mut state = CourseWatchState::new();
        let first = LectureID::new();
        let second = LectureID::new();

        state.update_progress(first, 100.0, 7200.0, THRESHOLD);
        state.update_progress(second, 200.0, 7200.0, THRESHOLD);
        state
            .in_progress
            .get_mut(&first)
            .unwrap()
            .last_watched += 60;

        let items = state.continue_watching(10);
        assert_eq!(items[0].lecture_id, first);

        let items = state.continue_watching(1);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn clear_progress_removes_both_collections() {
        let mut state = CourseWatchState::new();
        let lecture = LectureID::new();

        state.update_progress(lecture, 7000.0, 7200.0, THRESHOLD);
        assert!(state.is_completed(&lecture));

        state.clear_progress(&lecture);
        assert!(!state.is_completed(&lecture));
        assert_eq!(state.get_progress(&lecture).as_ratio(), 0.0);
    }

    #[test]
    fn watch_state_serializes_in_progress_as_list() {
        let mut state = CourseWatchState::new();
        let lecture = LectureID::new();
        state.update_progress(lecture, 300.0, 7200.0, THRESHOLD);

        let value = serde_json::to_value(&state).unwrap();
        assert!(value["in_progress"].is_array());
        assert_eq!(value["in_progress"].as_array().unwrap().len(), 1);

        let round_tripped: CourseWatchState =
            serde_json::from_value(value).unwrap();
        assert_eq!(round_tripped.in_progress.len(), 1);
        assert!(round_tripped.in_progress.contains_key(&lecture));
    }
}
