//! Slot accessors: exercises, superset detection and per-iteration set data.

use crate::{ExerciseId, SetConfigData, Slot, SlotEntry};
use std::collections::HashSet;

/// Read-only view of a slot as consumed by the display code
///
/// `Slot` implements this directly. Callers backed by another store can
/// implement it on their own records as long as the data is already loaded.
pub trait SlotView {
    fn comment(&self) -> &str;

    /// Exercise ids in entry order. May be empty.
    fn exercises(&self) -> Vec<ExerciseId>;

    /// Set configurations for `iteration`, in entry order
    fn set_data(&self, iteration: u32) -> Vec<SetConfigData>;

    /// More than one distinct exercise
    fn is_superset(&self) -> bool {
        let exercises = self.exercises();
        let distinct: HashSet<_> = exercises.iter().collect();
        distinct.len() > 1
    }
}

impl SlotEntry {
    /// Configuration in force for `iteration`
    ///
    /// That is the config with the greatest starting iteration that is not
    /// after `iteration`. Returns None when every config starts later.
    pub fn config_for(&self, iteration: u32) -> Option<&SetConfigData> {
        self.configs
            .iter()
            .filter(|c| c.iteration <= iteration)
            .max_by_key(|c| c.iteration)
            .map(|c| &c.data)
    }
}

impl SlotView for Slot {
    fn comment(&self) -> &str {
        &self.comment
    }

    fn exercises(&self) -> Vec<ExerciseId> {
        self.entries.iter().map(|e| e.exercise_id).collect()
    }

    fn set_data(&self, iteration: u32) -> Vec<SetConfigData> {
        self.entries
            .iter()
            .filter_map(|e| e.config_for(iteration))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IterationConfig;

    fn config(iteration: u32, reps: u32) -> IterationConfig {
        IterationConfig {
            iteration,
            data: SetConfigData {
                reps: Some(reps),
                ..Default::default()
            },
        }
    }

    fn entry(exercise_id: ExerciseId, configs: Vec<IterationConfig>) -> SlotEntry {
        SlotEntry {
            exercise_id,
            configs,
        }
    }

    fn slot(entries: Vec<SlotEntry>) -> Slot {
        Slot {
            id: 1,
            order: 1,
            comment: String::new(),
            entries,
        }
    }

    #[test]
    fn test_config_for_uses_latest_started_config() {
        // Deliberately unsorted
        let e = entry(7, vec![config(5, 8), config(1, 10), config(3, 9)]);

        assert_eq!(e.config_for(1).unwrap().reps, Some(10));
        assert_eq!(e.config_for(2).unwrap().reps, Some(10));
        assert_eq!(e.config_for(4).unwrap().reps, Some(9));
        assert_eq!(e.config_for(12).unwrap().reps, Some(8));
    }

    #[test]
    fn test_config_for_before_first_config() {
        let e = entry(7, vec![config(2, 10)]);
        assert!(e.config_for(1).is_none());
    }

    #[test]
    fn test_exercises_keep_entry_order() {
        let s = slot(vec![entry(3, vec![]), entry(1, vec![]), entry(2, vec![])]);
        assert_eq!(s.exercises(), vec![3, 1, 2]);
    }

    #[test]
    fn test_superset_needs_distinct_exercises() {
        assert!(!slot(vec![]).is_superset());
        assert!(!slot(vec![entry(1, vec![])]).is_superset());
        assert!(!slot(vec![entry(1, vec![]), entry(1, vec![])]).is_superset());
        assert!(slot(vec![entry(1, vec![]), entry(2, vec![])]).is_superset());
    }

    #[test]
    fn test_set_data_skips_unconfigured_entries() {
        let s = slot(vec![
            entry(1, vec![config(1, 5)]),
            entry(2, vec![config(3, 12)]),
        ]);

        let first = s.set_data(1);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].reps, Some(5));

        let third = s.set_data(3);
        assert_eq!(third.len(), 2);
        assert_eq!(third[1].reps, Some(12));
    }
}
