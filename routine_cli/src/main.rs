use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use routine_core::config::DataConfig;
use routine_core::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "routine")]
#[command(about = "Training routine planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a day's exercises for an iteration
    Show {
        /// Routine JSON file
        #[arg(long)]
        routine: PathBuf,

        /// Day id
        #[arg(long)]
        day: DayId,

        /// Iteration (week) to show
        #[arg(long, default_value_t = 1)]
        iteration: u32,

        /// One entry per slot, without merging repeated exercises
        #[arg(long)]
        gym: bool,

        /// Print the groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the next day may be started
    ///
    /// Exits with status 1 when the day is blocked.
    CanProceed {
        /// Routine JSON file
        #[arg(long)]
        routine: PathBuf,

        /// Day id
        #[arg(long)]
        day: DayId,

        /// Date to check (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log a workout session for a day
    Log {
        /// Routine JSON file
        #[arg(long)]
        routine: PathBuf,

        /// Day id
        #[arg(long)]
        day: DayId,

        /// Session date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show which day falls on each upcoming date
    Schedule {
        /// Routine JSON file
        #[arg(long)]
        routine: PathBuf,

        /// First date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Number of dates to list
        #[arg(long)]
        days: Option<u32>,

        /// Also write the schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    routine_core::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            routine,
            day,
            iteration,
            gym,
            json,
        } => cmd_show(&routine, day, iteration, gym, json)?,
        Commands::CanProceed { routine, day, date } => {
            let log_path = session_log_path(cli.data_dir, None)?;
            if !cmd_can_proceed(&routine, day, date, &log_path)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Log {
            routine,
            day,
            date,
            notes,
        } => {
            let log_path = session_log_path(cli.data_dir, None)?;
            cmd_log(&routine, day, date, notes, &log_path)?
        }
        Commands::Schedule {
            routine,
            from,
            days,
            csv,
        } => {
            let config = Config::load()?;
            let log_path = session_log_path(cli.data_dir, Some(&config))?;
            cmd_schedule(&routine, from, days, csv, &log_path, &config)?
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Session log under `--data-dir`, falling back to the configured data dir
///
/// The config file is only read when no override is given and the caller
/// has not loaded it already.
fn session_log_path(data_dir: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    let data_dir = match (data_dir, config) {
        (Some(dir), _) => dir,
        (None, Some(config)) => config.data.data_dir.clone(),
        (None, None) => Config::load()?.data.data_dir,
    };

    let log_path = DataConfig::session_log_path(&data_dir);
    tracing::debug!("Using session log at {:?}", log_path);
    Ok(log_path)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn cmd_show(routine_path: &Path, day_id: DayId, iteration: u32, gym: bool, json: bool) -> Result<()> {
    let routine = load_routine(routine_path)?;
    let day = routine.require_day(day_id)?;

    let groups = if gym {
        day.slots_gym_mode(iteration)
    } else {
        day.slots_display_mode(iteration)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!("\n{} ({}), iteration {}", day.name, day.day_type, iteration);
    if !day.description.is_empty() {
        println!("  {}", day);
    }
    println!();

    if day.is_rest {
        println!("  Rest day");
        return Ok(());
    }

    if groups.is_empty() {
        println!("  No exercises");
        return Ok(());
    }

    for (i, group) in groups.iter().enumerate() {
        let exercises: Vec<String> = group.exercises.iter().map(|e| e.to_string()).collect();
        let label = if group.exercises.len() > 1 {
            "Superset"
        } else {
            "Exercise"
        };

        println!("  {}. {} {}", i + 1, label, exercises.join(" + "));
        if !group.comment.is_empty() {
            println!("     {}", group.comment);
        }
        for sets in &group.sets {
            println!("     → {}", describe_sets(sets));
        }
    }

    println!();
    Ok(())
}

fn describe_sets(data: &SetConfigData) -> String {
    let mut parts = Vec::new();

    match (data.sets, data.reps) {
        (Some(sets), Some(reps)) => parts.push(format!("{} x {}", sets, reps)),
        (Some(sets), None) => parts.push(format!("{} sets", sets)),
        (None, Some(reps)) => parts.push(format!("{} reps", reps)),
        (None, None) => {}
    }
    if let Some(weight) = data.weight {
        parts.push(format!("@ {}", weight));
    }
    if let Some(rir) = data.rir {
        parts.push(format!("RiR {}", rir));
    }
    if let Some(rest) = data.rest {
        parts.push(format!("rest {}s", rest));
    }
    if !data.comment.is_empty() {
        parts.push(format!("({})", data.comment));
    }

    if parts.is_empty() {
        "as prescribed".to_string()
    } else {
        parts.join(", ")
    }
}

fn cmd_can_proceed(
    routine_path: &Path,
    day_id: DayId,
    date: Option<NaiveDate>,
    log_path: &Path,
) -> Result<bool> {
    let routine = load_routine(routine_path)?;
    let day = routine.require_day(day_id)?;
    let sessions = SessionIndex::load(log_path)?;
    let date = date.unwrap_or_else(today);

    let open = day.can_proceed(date, &sessions);
    if open {
        println!("✓ {} on {}: can proceed", day.name, date);
    } else {
        println!("✗ {} on {}: blocked, log a session first", day.name, date);
    }

    Ok(open)
}

fn cmd_log(
    routine_path: &Path,
    day_id: DayId,
    date: Option<NaiveDate>,
    notes: Option<String>,
    log_path: &Path,
) -> Result<()> {
    let routine = load_routine(routine_path)?;
    let day = routine.require_day(day_id)?;

    let mut session = WorkoutSession::new(day.id, date.unwrap_or_else(today));
    session.notes = notes;

    let mut log = JsonlSessionLog::new(log_path);
    log.append(&session)?;

    println!("✓ Session logged for {} on {}", day.name, session.date);
    Ok(())
}

fn cmd_schedule(
    routine_path: &Path,
    from: Option<NaiveDate>,
    days: Option<u32>,
    csv: Option<PathBuf>,
    log_path: &Path,
    config: &Config,
) -> Result<()> {
    let routine = load_routine(routine_path)?;
    let sessions = SessionIndex::load(log_path)?;

    let start = from.unwrap_or_else(today);
    let count = days.unwrap_or(config.schedule.horizon_days);
    if count == 0 {
        println!("Nothing to schedule.");
        return Ok(());
    }
    let end = start
        .checked_add_signed(Duration::days(i64::from(count) - 1))
        .ok_or_else(|| {
            Error::Schedule(format!(
                "{} days from {} is past the last representable date",
                count, start
            ))
        })?;

    let schedule = date_sequence(
        &routine,
        start,
        end,
        today(),
        &sessions,
        config.schedule.max_chain_hops,
    )?;

    println!("\n{}\n", routine.name);
    for entry in &schedule {
        let day = routine.require_day(entry.day_id)?;
        let rest = if day.is_rest { "  (rest)" } else { "" };
        println!(
            "  {}  week {}  {}{}",
            entry.date, entry.iteration, day.name, rest
        );
    }
    println!();

    if let Some(csv_path) = csv {
        let written = write_schedule_csv(&csv_path, &schedule, &routine)?;
        println!("✓ Wrote {} days to {}", written, csv_path.display());
    }

    Ok(())
}
