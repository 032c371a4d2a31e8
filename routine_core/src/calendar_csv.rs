//! CSV export of a computed schedule.
//!
//! The file is written to a temp file in the target directory, synced, and
//! then renamed over the target so readers never see a half-written file.

use crate::schedule::ScheduledDay;
use crate::{Error, Result, Routine};
use std::path::Path;
use tempfile::NamedTempFile;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    date: String,
    day_id: u32,
    day_name: &'a str,
    iteration: u32,
    is_rest: bool,
}

/// Write `schedule` to `path` as CSV with a header row
///
/// Returns the number of rows written. Every scheduled day must exist in
/// `routine`.
pub fn write_schedule_csv(path: &Path, schedule: &[ScheduledDay], routine: &Routine) -> Result<usize> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(temp.as_file());

        for entry in schedule {
            let day = routine.require_day(entry.day_id)?;
            writer.serialize(CsvRow {
                date: entry.date.to_string(),
                day_id: entry.day_id,
                day_name: &day.name,
                iteration: entry.iteration,
                is_rest: day.is_rest,
            })?;
        }

        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Wrote {} scheduled days to {:?}", schedule.len(), path);
    Ok(schedule.len())
}
