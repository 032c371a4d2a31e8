//! Core domain types for routines and training days.
//!
//! This module defines the fundamental types used throughout the system:
//! - Routines and their days
//! - Slots, slot entries and per-iteration set configuration
//! - Display units produced from slots
//! - Logged workout sessions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type RoutineId = u32;
pub type DayId = u32;
pub type SlotId = u32;
pub type ExerciseId = u32;

// ============================================================================
// Day Types
// ============================================================================

/// Workout format of a day. Informational only.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    #[default]
    Normal,
    /// Stored as "enom" in existing routine files
    #[serde(rename = "enom", alias = "emom")]
    Emom,
    Amrap,
    Hiit,
    Tabata,
    Edt,
    Rft,
    Afap,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayType::Normal => "normal",
            DayType::Emom => "emom",
            DayType::Amrap => "amrap",
            DayType::Hiit => "hiit",
            DayType::Tabata => "tabata",
            DayType::Edt => "edt",
            DayType::Rft => "rft",
            DayType::Afap => "afap",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Set Configuration
// ============================================================================

/// Prescribed set configuration for one exercise in one iteration
///
/// Computed upstream; the display and progression code only moves it around.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct SetConfigData {
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub rir: Option<f32>,
    /// Rest between sets, in seconds
    #[serde(default)]
    pub rest: Option<u32>,
    #[serde(default)]
    pub comment: String,
}

/// A set configuration that takes effect from `iteration` onwards
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IterationConfig {
    pub iteration: u32,
    pub data: SetConfigData,
}

// ============================================================================
// Slots
// ============================================================================

/// One exercise inside a slot with its configuration history
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SlotEntry {
    pub exercise_id: ExerciseId,
    #[serde(default)]
    pub configs: Vec<IterationConfig>,
}

/// An ordered unit within a day holding one or more exercises
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    pub id: SlotId,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub entries: Vec<SlotEntry>,
}

/// Display unit built from one or more slots
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SlotData {
    pub comment: String,
    pub exercises: Vec<ExerciseId>,
    pub sets: Vec<SetConfigData>,
}

// ============================================================================
// Days and Routines
// ============================================================================

/// A single training day inside a routine
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Day {
    pub id: DayId,
    pub routine_id: RoutineId,
    /// Day that follows this one. May form a cycle; walkers must guard.
    #[serde(default)]
    pub next_day: Option<DayId>,
    #[serde(default, rename = "type")]
    pub day_type: DayType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Rest days have no exercises
    #[serde(default)]
    pub is_rest: bool,
    #[serde(default)]
    pub need_logs_to_advance: bool,
    /// Last workout day of the week; completing it starts a new iteration
    #[serde(default)]
    pub last_day_in_week: bool,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A multi-day training plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    pub id: RoutineId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Day the schedule starts on. Defaults to the first listed day.
    #[serde(default)]
    pub first_day: Option<DayId>,
    pub days: Vec<Day>,
}

// ============================================================================
// Sessions
// ============================================================================

/// How the user felt about a workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Impression {
    Discomfort,
    Neutral,
    Perfect,
}

/// A logged workout for a day on a given date
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub day_id: DayId,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub impression: Option<Impression>,
    pub logged_at: DateTime<Utc>,
}

impl WorkoutSession {
    /// New session for `day_id` on `date`, stamped now
    pub fn new(day_id: DayId, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            day_id,
            date,
            notes: None,
            impression: None,
            logged_at: Utc::now(),
        }
    }
}
