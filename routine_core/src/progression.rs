//! Progression gate: may the user move on to the next day?
//!
//! Advancing is allowed when any of these holds:
//! - the day does not require logs
//! - a workout session was logged for the day on the date
//! - the date is strictly in the future (calendars assume we will proceed)

use crate::{Day, DayId};
use chrono::{Local, NaiveDate};

/// Answers whether a session was logged for a day on a date
pub trait SessionLookup {
    fn exists_on(&self, day_id: DayId, date: NaiveDate) -> bool;
}

impl<F> SessionLookup for F
where
    F: Fn(DayId, NaiveDate) -> bool,
{
    fn exists_on(&self, day_id: DayId, date: NaiveDate) -> bool {
        self(day_id, date)
    }
}

/// Gate check against an explicit "today"
pub fn can_proceed_at<L: SessionLookup + ?Sized>(
    day: &Day,
    date: NaiveDate,
    today: NaiveDate,
    sessions: &L,
) -> bool {
    if !day.need_logs_to_advance {
        return true;
    }

    if sessions.exists_on(day.id, date) {
        tracing::debug!("Day {} has a session on {}, can proceed", day.id, date);
        return true;
    }

    if date > today {
        tracing::debug!("{} is after {}, assuming day {} will be logged", date, today, day.id);
        return true;
    }

    tracing::debug!("Day {} needs logs for {} before advancing", day.id, date);
    false
}

/// Gate check against the local system date
pub fn can_proceed<L: SessionLookup + ?Sized>(day: &Day, date: NaiveDate, sessions: &L) -> bool {
    can_proceed_at(day, date, Local::now().date_naive(), sessions)
}

impl Day {
    /// Whether the user may move past this day on `date`
    pub fn can_proceed<L: SessionLookup + ?Sized>(&self, date: NaiveDate, sessions: &L) -> bool {
        can_proceed(self, date, sessions)
    }
}
