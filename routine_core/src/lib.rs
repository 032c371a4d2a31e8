#![forbid(unsafe_code)]

//! Core domain model and business logic for training routines.
//!
//! This crate provides:
//! - Domain types (routines, days, slots, sessions)
//! - Display grouping of a day's slots
//! - The progression gate deciding when a day may be left
//! - Schedule walking over the day chain
//! - Persistence (session log, routine files, calendar CSV)

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod slot;
pub mod display;
pub mod progression;
pub mod history;
pub mod routine;
pub mod schedule;
pub mod calendar_csv;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use slot::SlotView;
pub use display::{build_display_slots, build_gym_slots};
pub use progression::{can_proceed, can_proceed_at, SessionLookup};
pub use history::{read_sessions, JsonlSessionLog, SessionIndex, SessionSink};
pub use routine::{load_routine, ChainEnd};
pub use schedule::{date_sequence, ScheduledDay};
pub use calendar_csv::write_schedule_csv;
