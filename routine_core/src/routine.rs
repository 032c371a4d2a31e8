//! Routine loading and day-chain lookups.

use crate::{Day, DayId, Error, Result, Routine};
use std::collections::HashSet;
use std::path::Path;

/// Load a routine from a JSON file
///
/// Slots of every day are put in their `order` after loading; ties keep
/// the order they had in the file.
pub fn load_routine(path: &Path) -> Result<Routine> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Routine(format!("Failed to read routine at {:?}: {}", path, e))
    })?;

    let mut routine: Routine = serde_json::from_str(&contents)?;
    for day in &mut routine.days {
        day.slots.sort_by_key(|s| s.order);
    }

    tracing::info!(
        "Loaded routine '{}' with {} days from {:?}",
        routine.name,
        routine.days.len(),
        path
    );

    Ok(routine)
}

/// Why a walk along `next_day` links stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainEnd {
    /// Last day has no `next_day`
    Open,
    /// `next_day` points back at a day already visited
    Cycle(DayId),
    /// `next_day` names a day that is not in the routine
    Dangling(DayId),
    /// Hop limit reached before any of the above
    HopLimit,
}

impl Routine {
    pub fn day(&self, id: DayId) -> Option<&Day> {
        self.days.iter().find(|d| d.id == id)
    }

    /// Like `day`, but a missing id is an error
    pub fn require_day(&self, id: DayId) -> Result<&Day> {
        self.day(id)
            .ok_or_else(|| Error::Routine(format!("Day {} not found in routine {}", id, self.id)))
    }

    /// Explicit first day, or the first listed day
    pub fn first_day_id(&self) -> Option<DayId> {
        self.first_day.or_else(|| self.days.first().map(|d| d.id))
    }

    /// Follow `next_day` links from `start`
    ///
    /// Returns the visited days in order and the reason the walk ended.
    /// Each day appears at most once. Every link followed counts against
    /// `max_hops`, including the one that closes a cycle.
    pub fn day_chain(&self, start: DayId, max_hops: usize) -> Result<(Vec<&Day>, ChainEnd)> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.require_day(start)?;

        loop {
            visited.insert(current.id);
            chain.push(current);

            let next_id = match current.next_day {
                Some(id) => id,
                None => return Ok((chain, ChainEnd::Open)),
            };

            // Following `next_id` would be hop number `chain.len()`
            if chain.len() > max_hops {
                tracing::warn!("Day chain from {} exceeded {} hops", start, max_hops);
                return Ok((chain, ChainEnd::HopLimit));
            }

            if visited.contains(&next_id) {
                return Ok((chain, ChainEnd::Cycle(next_id)));
            }

            current = match self.day(next_id) {
                Some(day) => day,
                None => return Ok((chain, ChainEnd::Dangling(next_id))),
            };
        }
    }
}
