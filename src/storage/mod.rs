/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a small repository interface for storing and retrieving habit records.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;
use crate::domain::{Habit, HabitId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the persistence interface for habits
///
/// The habit store treats an implementation of this trait as the single
/// source of truth: every mutation goes through `save`/`delete` and every
/// read starts from `load` or `get`. Each operation is durable by the time
/// it returns. The trait also allows swapping SQLite for another backend
/// without touching the store.
pub trait HabitRepository {
    /// Load the full set of habits, in insertion order
    fn load(&self) -> Result<Vec<Habit>, StorageError>;

    /// Get a single habit by ID
    fn get(&self, habit_id: &HabitId) -> Result<Habit, StorageError>;

    /// Insert a new habit or update an existing one by ID
    ///
    /// Updating must keep the habit's position in the insertion order.
    fn save(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Permanently remove a habit
    fn delete(&self, habit_id: &HabitId) -> Result<(), StorageError>;
}
