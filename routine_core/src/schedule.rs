//! Calendar walk over a routine's day chain.
//!
//! Starting at the routine's first day, each calendar date is assigned the
//! current day. The walk moves on to `next_day` only when the progression
//! gate allows it, so a day that needs logs repeats until it is logged.
//! Passing a day flagged `last_day_in_week` starts the next iteration.

use crate::progression::{can_proceed_at, SessionLookup};
use crate::routine::ChainEnd;
use crate::{DayId, Error, Result, Routine};
use chrono::NaiveDate;
use serde::Serialize;

/// A routine day assigned to a calendar date
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduledDay {
    pub date: NaiveDate,
    pub day_id: DayId,
    /// 1-based iteration (week) the day falls in
    pub iteration: u32,
}

/// Assign routine days to every date in `[start, end]`
///
/// `today` decides which dates count as future for the progression gate.
/// The chain from the first day is checked before walking: a `next_day`
/// pointing outside the routine, or a chain longer than `max_hops`, is an
/// error. Cycles are the normal shape of a repeating routine and are fine.
pub fn date_sequence<L: SessionLookup + ?Sized>(
    routine: &Routine,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
    sessions: &L,
    max_hops: usize,
) -> Result<Vec<ScheduledDay>> {
    let first = routine
        .first_day_id()
        .ok_or_else(|| Error::Schedule(format!("Routine {} has no days", routine.id)))?;

    let (chain, chain_end) = routine.day_chain(first, max_hops)?;
    match chain_end {
        ChainEnd::Dangling(id) => {
            return Err(Error::Schedule(format!(
                "Day chain of routine {} points at unknown day {}",
                routine.id, id
            )));
        }
        ChainEnd::HopLimit => {
            return Err(Error::Schedule(format!(
                "Day chain of routine {} is longer than {} days",
                routine.id, max_hops
            )));
        }
        ChainEnd::Open | ChainEnd::Cycle(_) => {}
    }
    tracing::debug!("Walking {} chained days from day {}", chain.len(), first);

    let mut out = Vec::new();
    let mut current = first;
    let mut iteration = 1;
    let mut date = start;

    while date <= end {
        let day = routine.require_day(current)?;
        out.push(ScheduledDay {
            date,
            day_id: day.id,
            iteration,
        });

        if can_proceed_at(day, date, today, sessions) {
            if day.last_day_in_week {
                iteration += 1;
            }
            current = day.next_day.unwrap_or(first);
        }

        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    tracing::info!(
        "Scheduled {} dates for routine '{}' from {}",
        out.len(),
        routine.name,
        start
    );

    Ok(out)
}
