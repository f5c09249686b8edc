/// Public library interface for the habit streak tracker
///
/// This module exports the habit store, the statistics and chart helpers,
/// and the public types that front ends or tests build on.

use std::path::PathBuf;

// Internal modules
mod analytics;
mod animation;
mod chart;
mod domain;
mod storage;
mod store;

// Re-export public modules and types
pub use domain::{DomainError, Habit, HabitId};
pub use storage::{HabitRepository, SqliteRepository, StorageError};
pub use store::{HabitStore, StoreError};
pub use analytics::{
    max_streak_habit, summarize, total_habit_count, total_streak_days, StatsSummary,
};
pub use chart::{bar_height_fraction, max_streak, y_axis_ticks};
pub use animation::{CountUp, DEFAULT_DURATION, FRAME_INTERVAL};

/// A habit tracker backed by a SQLite database
///
/// This is the assembled application core: it opens the database, runs
/// migrations, and exposes the habit store the front end talks to.
pub struct HabitTracker {
    store: HabitStore<SqliteRepository>,
}

impl HabitTracker {
    /// Open a tracker on the given database file
    ///
    /// This will initialize the database with the required schema if it
    /// doesn't already exist.
    pub fn open(db_path: PathBuf) -> Result<Self, StoreError> {
        tracing::info!("Opening habit tracker with database: {:?}", db_path);

        let repo = SqliteRepository::open(db_path)?;

        Ok(Self {
            store: HabitStore::new(repo),
        })
    }

    /// Open a tracker on an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let repo = SqliteRepository::open_in_memory()?;

        Ok(Self {
            store: HabitStore::new(repo),
        })
    }

    /// Get a reference to the habit store
    pub fn store(&self) -> &HabitStore<SqliteRepository> {
        &self.store
    }
}
