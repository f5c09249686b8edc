/// Basic unit tests to verify core functionality
use habit_streaks::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new("Test Habit");

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.name, "Test Habit");
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn test_next_goal_is_always_the_next_milestone() {
        let mut habit = Habit::new("Read").unwrap();

        for _ in 0..35 {
            let goal = habit.next_goal();
            assert!(goal > habit.streak);
            assert_eq!(goal % 10, 0);
            assert!(goal - habit.streak <= 10);
            habit.increment_streak();
        }
    }

    #[test]
    fn test_stats_over_empty_and_small_snapshots() {
        assert_eq!(total_streak_days(&[]), 0);
        assert!(max_streak_habit(&[]).is_none());

        let mut a = Habit::new("A").unwrap();
        let mut b = Habit::new("B").unwrap();
        for _ in 0..3 {
            a.increment_streak();
        }
        for _ in 0..5 {
            b.increment_streak();
        }

        let habits = vec![a, b];
        assert_eq!(total_habit_count(&habits), 2);
        assert_eq!(total_streak_days(&habits), 8);
        assert_eq!(max_streak_habit(&habits).unwrap().name, "B");
    }

    #[test]
    fn test_chart_helpers() {
        assert_eq!(max_streak(&[]), 1);
        assert_eq!(max_streak(&[0, 7]), 7);
        assert_eq!(y_axis_ticks(0), vec![0]);
        assert_eq!(y_axis_ticks(12), vec![0, 2, 4, 6, 8, 10, 12]);
        assert_eq!(bar_height_fraction(0, 10).unwrap(), 0.0);
        assert_eq!(bar_height_fraction(5, 10).unwrap(), 0.5);
        assert!(bar_height_fraction(5, 0).is_err());
    }

    #[test]
    fn test_tracker_creation_on_disk() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let tracker = HabitTracker::open(temp_file.path().to_path_buf());
        assert!(tracker.is_ok());
    }

    #[test]
    fn test_repository_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let repo = SqliteRepository::open(temp_file.path().to_path_buf());
        assert!(repo.is_ok());
    }

    #[test]
    fn test_count_up_pacing() {
        let count = CountUp::new(40, std::time::Duration::from_secs(2));
        assert_eq!(count.value_at(std::time::Duration::ZERO), 0);
        assert_eq!(count.value_at(std::time::Duration::from_secs(1)), 20);
        assert_eq!(count.value_at(std::time::Duration::from_secs(2)), 40);
        assert_eq!(count.value_at(std::time::Duration::from_secs(3)), 40);
    }
}
