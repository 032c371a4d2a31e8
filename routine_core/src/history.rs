//! Workout session log.
//!
//! Sessions are appended to a JSONL (JSON Lines) file with file locking
//! so concurrent writers never interleave lines. The log is read back into
//! a `SessionIndex` that answers the progression gate's existence check.

use crate::progression::SessionLookup;
use crate::{DayId, Result, WorkoutSession};
use chrono::NaiveDate;
use fs2::FileExt;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Session sink trait for persisting sessions
pub trait SessionSink {
    fn append(&mut self, session: &WorkoutSession) -> Result<()>;
}

/// JSONL-based session log with file locking
pub struct JsonlSessionLog {
    path: PathBuf,
}

impl JsonlSessionLog {
    /// Create a new session log for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl SessionSink for JsonlSessionLog {
    fn append(&mut self, session: &WorkoutSession) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(session)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::debug!(
            "Logged session {} for day {} on {}",
            session.id,
            session.day_id,
            session.date
        );
        Ok(())
    }
}

/// Read every session from a log file
///
/// A missing file is an empty history. Malformed lines are skipped with a
/// warning so one bad write does not hide the rest of the log.
pub fn read_sessions(path: &Path) -> Result<Vec<WorkoutSession>> {
    if !path.exists() {
        tracing::debug!("No session log at {:?}", path);
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut sessions = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<WorkoutSession>(&line) {
            Ok(session) => sessions.push(session),
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed session at {:?} line {}: {}",
                    path,
                    line_num + 1,
                    e
                );
            }
        }
    }

    file.unlock()?;

    tracing::debug!("Read {} sessions from {:?}", sessions.len(), path);
    Ok(sessions)
}

/// Set of (day, date) pairs that have at least one logged session
#[derive(Clone, Debug, Default)]
pub struct SessionIndex {
    logged: HashSet<(DayId, NaiveDate)>,
}

impl SessionIndex {
    pub fn from_sessions<'a>(sessions: impl IntoIterator<Item = &'a WorkoutSession>) -> Self {
        Self {
            logged: sessions.into_iter().map(|s| (s.day_id, s.date)).collect(),
        }
    }

    /// Load the index straight from a log file
    pub fn load(path: &Path) -> Result<Self> {
        let sessions = read_sessions(path)?;
        Ok(Self::from_sessions(&sessions))
    }

    pub fn insert(&mut self, day_id: DayId, date: NaiveDate) {
        self.logged.insert((day_id, date));
    }

    pub fn len(&self) -> usize {
        self.logged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logged.is_empty()
    }
}

impl SessionLookup for SessionIndex {
    fn exists_on(&self, day_id: DayId, date: NaiveDate) -> bool {
        self.logged.contains(&(day_id, date))
    }
}
