/// Main entry point for the habit streak tracker CLI
///
/// This file sets up logging, parses command line arguments, and drives
/// the habit store in response to user commands: adding habits, bumping
/// and resetting streaks, and showing stats with the count-up display.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use habit_streaks::{
    summarize, CountUp, HabitId, HabitTracker, DEFAULT_DURATION, FRAME_INTERVAL,
};

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit-streaks");
            p
        }),
        // 2. User's home directory
        dirs::home_dir().map(|mut p| {
            p.push(".habit-streaks");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let mut db_path = potential_path.clone();
            db_path.push("habits.db");
            return Ok(db_path);
        }
    }

    // Last resort: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit-streaks");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit streak tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new habit
    Add {
        /// Name of the habit
        name: String,
    },
    /// List all habits with their streaks and next goals
    List,
    /// Record a completion for a habit
    Done {
        /// ID of the habit
        id: String,
    },
    /// Reset a habit's streak to zero
    Reset {
        /// ID of the habit
        id: String,
    },
    /// Rename a habit
    Rename {
        /// ID of the habit
        id: String,
        /// New name for the habit
        name: String,
    },
    /// Delete a habit permanently
    Remove {
        /// ID of the habit
        id: String,
    },
    /// Show aggregate statistics
    Stats {
        /// Print the final numbers without the count-up display
        #[arg(long)]
        no_animation: bool,
    },
    /// Dump all habits as JSON
    Export,
}

/// Parse a habit ID from its command line form
fn parse_id(s: &str) -> Result<HabitId, String> {
    HabitId::from_string(s).map_err(|_| format!("Invalid habit id: {}", s))
}

/// Show the stats screen, counting the numbers up from zero
async fn show_stats(tracker: &HabitTracker, animate: bool) -> Result<(), Box<dyn std::error::Error>> {
    let habits = tracker.store().list_habits()?;
    let summary = summarize(&habits);

    let best_streak = summary.best_habit.as_ref().map_or(0, |h| h.streak);

    if animate {
        let counters = [
            CountUp::new(summary.total_habits as u64, DEFAULT_DURATION),
            CountUp::new(summary.total_streak_days, DEFAULT_DURATION),
            CountUp::new(u64::from(best_streak), DEFAULT_DURATION),
        ];

        let start = Instant::now();
        let mut interval = tokio::time::interval(FRAME_INTERVAL);
        loop {
            interval.tick().await;
            let elapsed = start.elapsed();

            print!(
                "\rHabits: {}   Total streaks: {} days   Max streak: {} days",
                counters[0].value_at(elapsed),
                counters[1].value_at(elapsed),
                counters[2].value_at(elapsed),
            );
            std::io::stdout().flush()?;

            if counters.iter().all(|c| c.is_complete(elapsed)) {
                break;
            }
        }
        println!();
    } else {
        println!(
            "Habits: {}   Total streaks: {} days   Max streak: {} days",
            summary.total_habits, summary.total_streak_days, best_streak,
        );
    }

    if let Some(best) = &summary.best_habit {
        println!("Longest streak: {} ({} days)", best.name, best.streak);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_streaks={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for command output
        .init();

    // Determine database path
    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let tracker = HabitTracker::open(db_path)?;
    let store = tracker.store();

    match args.command {
        Command::Add { name } => {
            let habit = store.create_habit(&name)?;
            println!("Added habit '{}' ({})", habit.name, habit.id);
        }
        Command::List => {
            let habits = store.list_habits()?;
            if habits.is_empty() {
                println!("No habits yet. Add one with `habit-streaks add <name>`.");
            } else {
                for habit in habits {
                    println!(
                        "🔥 {} — streak: {} days, next goal: {}  [{}]",
                        habit.name,
                        habit.streak,
                        habit.next_goal(),
                        habit.id,
                    );
                }
            }
        }
        Command::Done { id } => {
            let habit = store.increment_streak(&parse_id(&id)?)?;
            println!(
                "🔥 {} is at {} day{} — next goal: {}",
                habit.name,
                habit.streak,
                if habit.streak == 1 { "" } else { "s" },
                habit.next_goal(),
            );
        }
        Command::Reset { id } => {
            let habit = store.reset_streak(&parse_id(&id)?)?;
            println!("Reset '{}' back to 0", habit.name);
        }
        Command::Rename { id, name } => {
            let habit = store.rename_habit(&parse_id(&id)?, &name)?;
            println!("Renamed habit to '{}'", habit.name);
        }
        Command::Remove { id } => {
            store.delete_habit(&parse_id(&id)?)?;
            println!("Deleted habit {}", id);
        }
        Command::Stats { no_animation } => {
            show_stats(&tracker, !no_animation).await?;
        }
        Command::Export => {
            let habits = store.list_habits()?;
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
    }

    Ok(())
}
