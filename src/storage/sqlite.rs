/// SQLite implementation of the habit repository
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit records. It handles all SQL queries and data
/// conversion.

use std::path::PathBuf;
use rusqlite::{params, Connection, Row};

use crate::domain::{Habit, HabitId};
use crate::storage::{migrations, HabitRepository, StorageError};

/// SQLite-based repository implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the operations defined in the HabitRepository trait. SQLite runs in
/// autocommit mode, so every mutation is durable once `execute` returns.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open (or create) a database file and run migrations on it
    pub fn open(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite repository initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Open an in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Convert a database row into a Habit
    fn habit_from_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
        let id_str: String = row.get(0)?;
        let id = HabitId::from_string(&id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let created_at_str: String = row.get(3)?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(3, "Invalid datetime".to_string(), rusqlite::types::Type::Text)
            })?
            .with_timezone(&chrono::Utc);

        Ok(Habit::from_existing(
            id,
            row.get(1)?, // name
            row.get(2)?, // streak
            created_at,
        ))
    }
}

impl HabitRepository for SqliteRepository {
    /// Load all habits in insertion order
    fn load(&self) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, streak, created_at FROM habits
             ORDER BY created_at ASC, rowid ASC",
        )?;

        let habit_iter = stmt.query_map([], Self::habit_from_row)?;

        let mut habits = Vec::new();
        for habit in habit_iter {
            habits.push(habit?);
        }

        Ok(habits)
    }

    /// Get a habit by its ID
    fn get(&self, habit_id: &HabitId) -> Result<Habit, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, streak, created_at FROM habits WHERE id = ?1",
        )?;

        let result = stmt.query_row(params![habit_id.to_string()], Self::habit_from_row);

        match result {
            Ok(habit) => Ok(habit),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Insert a new habit or update an existing one by ID
    ///
    /// The upsert keeps the original rowid, so updated habits stay at their
    /// place in the insertion order.
    fn save(&self, habit: &Habit) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO habits (id, name, streak, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                streak = excluded.streak",
            params![
                habit.id.to_string(),
                habit.name,
                habit.streak,
                habit.created_at.to_rfc3339(),
            ],
        )?;

        tracing::debug!("Saved habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Permanently remove a habit
    fn delete(&self, habit_id: &HabitId) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![habit_id.to_string()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        tracing::debug!("Deleted habit: {}", habit_id);
        Ok(())
    }
}
