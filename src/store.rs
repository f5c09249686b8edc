/// The habit store: create, rename, increment, reset, delete, list
///
/// This module holds the operations the front end calls in response to
/// user actions. The store keeps no state of its own - the repository is
/// the single source of truth and every operation reads through to it, so
/// a failed load surfaces as an error instead of a stale snapshot.

use thiserror::Error;

use crate::domain::{DomainError, Habit, HabitId};
use crate::storage::{HabitRepository, StorageError};

/// Errors returned by habit store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Habit not found: {habit_id}")]
    NotFound { habit_id: String },

    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::HabitNotFound { habit_id } => StoreError::NotFound { habit_id },
            other => StoreError::Storage(other),
        }
    }
}

/// The authoritative collection of habits
pub struct HabitStore<R: HabitRepository> {
    repo: R,
}

impl<R: HabitRepository> HabitStore<R> {
    /// Create a store on top of a repository
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Snapshot of all habits, in insertion order
    pub fn list_habits(&self) -> Result<Vec<Habit>, StoreError> {
        Ok(self.repo.load()?)
    }

    /// Create a new habit with a streak of zero
    ///
    /// The name must be non-empty after trimming; validation lives on the
    /// domain type so no caller can slip an empty name past the store.
    pub fn create_habit(&self, name: &str) -> Result<Habit, StoreError> {
        let habit = Habit::new(name)?;
        self.repo.save(&habit)?;

        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        Ok(habit)
    }

    /// Replace a habit's name, leaving id and streak untouched
    pub fn rename_habit(&self, id: &HabitId, new_name: &str) -> Result<Habit, StoreError> {
        let mut habit = self.repo.get(id)?;
        habit.rename(new_name)?;
        self.repo.save(&habit)?;

        Ok(habit)
    }

    /// Record one more completion for a habit
    pub fn increment_streak(&self, id: &HabitId) -> Result<Habit, StoreError> {
        let mut habit = self.repo.get(id)?;
        habit.increment_streak();
        self.repo.save(&habit)?;

        tracing::debug!("Habit {} streak is now {}", habit.name, habit.streak);
        Ok(habit)
    }

    /// Drop a habit's streak back to zero
    ///
    /// Unconditional; asking the user "are you sure?" is the front end's
    /// job, not the store's.
    pub fn reset_streak(&self, id: &HabitId) -> Result<Habit, StoreError> {
        let mut habit = self.repo.get(id)?;
        habit.reset_streak();
        self.repo.save(&habit)?;

        Ok(habit)
    }

    /// Permanently remove a habit
    ///
    /// There is no tombstone and no undo; every later operation on the id
    /// fails with NotFound.
    pub fn delete_habit(&self, id: &HabitId) -> Result<(), StoreError> {
        self.repo.delete(id)?;

        tracing::debug!("Deleted habit: {}", id);
        Ok(())
    }
}
