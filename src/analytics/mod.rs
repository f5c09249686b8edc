/// Statistics over a snapshot of habits
///
/// This module computes the summary figures the stats screen shows. All
/// functions are pure and total over any input, including an empty one;
/// they never touch storage.

use serde::Serialize;
use crate::domain::Habit;

/// Summary figures for the stats screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Number of habits being tracked
    pub total_habits: usize,
    /// Sum of every habit's streak
    pub total_streak_days: u64,
    /// The habit with the longest current streak, if any exist
    pub best_habit: Option<Habit>,
}

/// Count of habits; zero for an empty snapshot
pub fn total_habit_count(habits: &[Habit]) -> usize {
    habits.len()
}

/// Sum of all streak values; zero for an empty snapshot
pub fn total_streak_days(habits: &[Habit]) -> u64 {
    habits.iter().map(|h| u64::from(h.streak)).sum()
}

/// The habit with the greatest streak, or None for an empty snapshot
///
/// Ties go to the earliest habit in store order: a later habit only takes
/// over when its streak is strictly greater.
pub fn max_streak_habit(habits: &[Habit]) -> Option<&Habit> {
    let mut best: Option<&Habit> = None;
    for habit in habits {
        match best {
            Some(current) if habit.streak <= current.streak => {}
            _ => best = Some(habit),
        }
    }
    best
}

/// Bundle all summary figures for one snapshot
pub fn summarize(habits: &[Habit]) -> StatsSummary {
    StatsSummary {
        total_habits: total_habit_count(habits),
        total_streak_days: total_streak_days(habits),
        best_habit: max_streak_habit(habits).cloned(),
    }
}
