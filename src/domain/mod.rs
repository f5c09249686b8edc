/// Domain module containing core business logic and data types
///
/// This module defines the Habit entity and its validation rules, plus the
/// identifier types the rest of the crate builds on.

pub mod habit;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
