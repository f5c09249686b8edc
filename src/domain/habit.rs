/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a habit the
/// user is tracking, along with name validation and the milestone goal
/// derived from the current streak.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{DomainError, HabitId};

/// A habit represents something the user wants to do regularly
///
/// This is the sole entity in the system. Each habit has a name and a
/// streak counter that the user bumps on every completion. The next
/// milestone goal is derived from the streak and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// How many times in a row the habit was completed
    pub streak: u32,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// New habits always start with a streak of zero. Returns an error if
    /// the name is empty after trimming or longer than 100 characters.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            streak: 0,
            created_at: Utc::now(),
        })
    }

    /// Create a habit from existing data (used when loading from database)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the storage layer when loading habits from the database.
    pub fn from_existing(
        id: HabitId,
        name: String,
        streak: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            streak,
            created_at,
        }
    }

    /// Replace the habit's name, keeping id and streak untouched
    pub fn rename(&mut self, new_name: &str) -> Result<(), DomainError> {
        self.name = Self::validate_name(new_name)?;
        Ok(())
    }

    /// Record one more completion
    ///
    /// Growth is unbounded on purpose; there is no cap to hit.
    pub fn increment_streak(&mut self) {
        self.streak += 1;
    }

    /// Drop the streak back to zero
    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }

    /// The next milestone the streak is working towards
    ///
    /// Milestones are multiples of 10: a streak of 0..=9 aims for 10, a
    /// streak of exactly 10 already aims for 20. The value is recomputed on
    /// every call so it can never drift from the streak.
    pub fn next_goal(&self) -> u32 {
        (self.streak / 10 + 1) * 10
    }

    /// Validate and normalize a habit name
    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(trimmed.to_string())
    }
}
