/// Basic integration tests
use habit_streaks::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[test]
    fn test_streak_lifecycle_end_to_end() {
        let tracker = HabitTracker::open_in_memory().expect("Failed to open tracker");
        let store = tracker.store();

        let habit = store.create_habit("Read").expect("Failed to create habit");
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.next_goal(), 10);

        for _ in 0..9 {
            store.increment_streak(&habit.id).unwrap();
        }
        let after_nine = store.list_habits().unwrap().remove(0);
        assert_eq!(after_nine.streak, 9);
        assert_eq!(after_nine.next_goal(), 10);

        let after_ten = store.increment_streak(&habit.id).unwrap();
        assert_eq!(after_ten.streak, 10);
        assert_eq!(after_ten.next_goal(), 20);

        let after_reset = store.reset_streak(&habit.id).unwrap();
        assert_eq!(after_reset.streak, 0);
        assert_eq!(after_reset.next_goal(), 10);
    }

    #[test]
    fn test_database_persistence_across_reopen() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let habit_id;
        {
            let tracker = HabitTracker::open(db_path.clone()).expect("Failed to open tracker");
            let habit = tracker.store().create_habit("Stretch").unwrap();
            tracker.store().increment_streak(&habit.id).unwrap();
            habit_id = habit.id;
        }

        // A second tracker on the same file sees the saved habit
        let tracker = HabitTracker::open(db_path).expect("Failed to reopen tracker");
        let habits = tracker.store().list_habits().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, habit_id);
        assert_eq!(habits[0].name, "Stretch");
        assert_eq!(habits[0].streak, 1);
    }

    #[test]
    fn test_deleted_habits_stay_gone() {
        let tracker = HabitTracker::open_in_memory().expect("Failed to open tracker");
        let store = tracker.store();

        let keep = store.create_habit("Keep").unwrap();
        let drop = store.create_habit("Drop").unwrap();

        store.delete_habit(&drop.id).unwrap();

        let habits = store.list_habits().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, keep.id);

        assert!(matches!(
            store.increment_streak(&drop.id),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_stats_follow_the_store() {
        let tracker = HabitTracker::open_in_memory().expect("Failed to open tracker");
        let store = tracker.store();

        let read = store.create_habit("Read").unwrap();
        let run = store.create_habit("Run").unwrap();
        for _ in 0..4 {
            store.increment_streak(&read.id).unwrap();
        }
        for _ in 0..7 {
            store.increment_streak(&run.id).unwrap();
        }

        let habits = store.list_habits().unwrap();
        let summary = summarize(&habits);
        assert_eq!(summary.total_habits, 2);
        assert_eq!(summary.total_streak_days, 11);
        assert_eq!(summary.best_habit.as_ref().unwrap().id, run.id);

        let streaks: Vec<u32> = habits.iter().map(|h| h.streak).collect();
        assert_eq!(max_streak(&streaks), 7);
        assert_eq!(y_axis_ticks(max_streak(&streaks)), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_repository_interface() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let repo = SqliteRepository::open(temp_file.path().to_path_buf())
            .expect("Failed to create repository");

        // The SQLite repository is usable behind the trait
        let _: &dyn HabitRepository = &repo;
    }
}
