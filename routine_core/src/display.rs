//! Display grouping of a day's slots.
//!
//! Two views are offered:
//! - Display mode: consecutive single-exercise slots that repeat the same
//!   exercise are merged into one group, so three "Squat" slots at rising
//!   intensity show as one block with three prescribed set entries
//! - Gym mode: one group per slot, nothing merged or skipped
//!
//! Supersets are never merged. Slots without exercises are skipped in
//! display mode and do not interrupt a merge run.

use crate::slot::SlotView;
use crate::{Day, ExerciseId, SlotData};

/// Collapse slots into display groups for `iteration`
///
/// Single pass in slot order. The group being extended is tracked by its
/// index in the output so it can be amended in place.
pub fn build_display_slots<S: SlotView>(slots: &[S], iteration: u32) -> Vec<SlotData> {
    let mut out: Vec<SlotData> = Vec::new();
    let mut last_exercise_id: Option<ExerciseId> = None;
    let mut current: Option<usize> = None;

    for slot in slots {
        if slot.is_superset() {
            out.push(SlotData {
                comment: slot.comment().to_string(),
                exercises: slot.exercises(),
                sets: slot.set_data(iteration),
            });
            current = None;
            last_exercise_id = None;
            continue;
        }

        // Empty slots leave the run state untouched
        let exercise_id = match slot.exercises().first() {
            Some(id) => *id,
            None => continue,
        };

        match current {
            Some(idx) if last_exercise_id == Some(exercise_id) => {
                out[idx].sets.extend(slot.set_data(iteration));
            }
            _ => {
                out.push(SlotData {
                    comment: slot.comment().to_string(),
                    exercises: vec![exercise_id],
                    sets: slot.set_data(iteration),
                });
                current = Some(out.len() - 1);
                last_exercise_id = Some(exercise_id);
            }
        }
    }

    tracing::debug!(
        "Display mode: {} slots collapsed into {} groups (iteration {})",
        slots.len(),
        out.len(),
        iteration
    );

    out
}

/// One group per slot, in order, including slots without exercises
pub fn build_gym_slots<S: SlotView>(slots: &[S], iteration: u32) -> Vec<SlotData> {
    slots
        .iter()
        .map(|slot| SlotData {
            comment: slot.comment().to_string(),
            exercises: slot.exercises(),
            sets: slot.set_data(iteration),
        })
        .collect()
}

impl Day {
    /// Merged slot groups for display
    pub fn slots_display_mode(&self, iteration: u32) -> Vec<SlotData> {
        build_display_slots(&self.slots, iteration)
    }

    /// Unmerged slot groups for a guided walkthrough
    pub fn slots_gym_mode(&self, iteration: u32) -> Vec<SlotData> {
        build_gym_slots(&self.slots, iteration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IterationConfig, SetConfigData, Slot, SlotEntry};

    fn sets(reps: u32) -> SetConfigData {
        SetConfigData {
            reps: Some(reps),
            ..Default::default()
        }
    }

    /// Slot with one entry per exercise, each configured from iteration 1
    fn slot(id: u32, comment: &str, exercises: &[(ExerciseId, u32)]) -> Slot {
        Slot {
            id,
            order: id,
            comment: comment.into(),
            entries: exercises
                .iter()
                .map(|&(exercise_id, reps)| SlotEntry {
                    exercise_id,
                    configs: vec![IterationConfig {
                        iteration: 1,
                        data: sets(reps),
                    }],
                })
                .collect(),
        }
    }

    fn empty(id: u32) -> Slot {
        slot(id, "placeholder", &[])
    }

    #[test]
    fn test_merges_consecutive_same_exercise() {
        crate::logging::init_test();

        let slots = vec![
            slot(1, "a", &[(1, 10)]),
            slot(2, "b", &[(1, 8)]),
            slot(3, "c", &[(2, 12)]),
        ];

        let out = build_display_slots(&slots, 1);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].exercises, vec![1]);
        assert_eq!(out[0].sets, vec![sets(10), sets(8)]);
        assert_eq!(out[0].comment, "a");
        assert_eq!(out[1].exercises, vec![2]);
        assert_eq!(out[1].sets, vec![sets(12)]);
    }

    #[test]
    fn test_superset_is_never_merged() {
        let slots = vec![slot(1, "ss", &[(1, 10), (2, 15)]), slot(2, "b", &[(1, 8)])];

        let out = build_display_slots(&slots, 1);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].exercises, vec![1, 2]);
        assert_eq!(out[0].sets, vec![sets(10), sets(15)]);
        assert_eq!(out[1].exercises, vec![1]);
        assert_eq!(out[1].sets, vec![sets(8)]);
    }

    #[test]
    fn test_superset_breaks_merge_run() {
        let slots = vec![
            slot(1, "a", &[(1, 10)]),
            slot(2, "ss", &[(2, 5), (3, 5)]),
            slot(3, "b", &[(1, 8)]),
        ];

        let out = build_display_slots(&slots, 1);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].sets, vec![sets(10)]);
        assert_eq!(out[2].exercises, vec![1]);
        assert_eq!(out[2].sets, vec![sets(8)]);
    }

    #[test]
    fn test_empty_slot_is_transparent() {
        let slots = vec![slot(1, "a", &[(1, 10)]), empty(2), slot(3, "b", &[(1, 8)])];

        let out = build_display_slots(&slots, 1);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].exercises, vec![1]);
        assert_eq!(out[0].sets, vec![sets(10), sets(8)]);
    }

    #[test]
    fn test_empty_slot_between_different_exercises() {
        let slots = vec![slot(1, "a", &[(1, 10)]), empty(2), slot(3, "b", &[(2, 8)])];

        let out = build_display_slots(&slots, 1);

        assert_eq!(out.len(), 2);
        assert_eq!(out[1].exercises, vec![2]);
    }

    #[test]
    fn test_leading_empty_slots_are_dropped() {
        let slots = vec![empty(1), empty(2), slot(3, "a", &[(4, 6)])];

        let out = build_display_slots(&slots, 1);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].comment, "a");
    }

    #[test]
    fn test_repeated_exercise_inside_one_slot_is_not_a_superset() {
        let slots = vec![slot(1, "a", &[(1, 10), (1, 8)]), slot(2, "b", &[(1, 6)])];

        let out = build_display_slots(&slots, 1);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].exercises, vec![1]);
        assert_eq!(out[0].sets, vec![sets(10), sets(8), sets(6)]);
    }

    #[test]
    fn test_iteration_selects_set_data() {
        let mut s = slot(1, "a", &[(1, 10)]);
        s.entries[0].configs.push(IterationConfig {
            iteration: 2,
            data: sets(12),
        });

        assert_eq!(build_display_slots(&[s.clone()], 1)[0].sets, vec![sets(10)]);
        assert_eq!(build_display_slots(&[s], 2)[0].sets, vec![sets(12)]);
    }

    #[test]
    fn test_display_is_idempotent() {
        let slots = vec![
            slot(1, "a", &[(1, 10)]),
            empty(2),
            slot(3, "ss", &[(2, 5), (3, 5)]),
            slot(4, "b", &[(2, 8)]),
            slot(5, "c", &[(2, 6)]),
        ];

        assert_eq!(build_display_slots(&slots, 1), build_display_slots(&slots, 1));
    }

    #[test]
    fn test_no_slots_yields_nothing() {
        let slots: Vec<Slot> = vec![];
        assert!(build_display_slots(&slots, 1).is_empty());
        assert!(build_gym_slots(&slots, 1).is_empty());
    }

    #[test]
    fn test_gym_mode_keeps_every_slot() {
        let slots = vec![
            slot(1, "a", &[(1, 10)]),
            empty(2),
            slot(3, "b", &[(1, 8)]),
            slot(4, "ss", &[(2, 5), (3, 5)]),
        ];

        let out = build_gym_slots(&slots, 1);

        assert_eq!(out.len(), slots.len());
        assert_eq!(out[0].sets, vec![sets(10)]);
        assert!(out[1].exercises.is_empty());
        assert!(out[1].sets.is_empty());
        assert_eq!(out[1].comment, "placeholder");
        assert_eq!(out[2].sets, vec![sets(8)]);
        assert_eq!(out[3].exercises, vec![2, 3]);
    }

    #[test]
    fn test_day_helpers_use_day_slots() {
        let day = Day {
            id: 1,
            routine_id: 1,
            next_day: None,
            day_type: Default::default(),
            name: "Legs".into(),
            description: String::new(),
            is_rest: false,
            need_logs_to_advance: false,
            last_day_in_week: false,
            slots: vec![slot(1, "a", &[(1, 10)]), slot(2, "b", &[(1, 8)])],
        };

        assert_eq!(day.slots_display_mode(1).len(), 1);
        assert_eq!(day.slots_gym_mode(1).len(), 2);
    }
}
