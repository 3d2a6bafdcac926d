#[cfg(test)]
mod tests {
    use neuro_os::db::db::{Db, DB_FILE_NAME};
    use neuro_os::libs::config::{Config, DatabaseConfig};
    use neuro_os::libs::data_storage::DataStorage;
    use neuro_os::libs::game::Game;
    use neuro_os::libs::quest::Difficulty;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { temp_dir }
        }
    }

    // Single test: the environment is process-wide.
    #[test_context(StorageTestContext)]
    #[test]
    fn test_database_location(ctx: &mut StorageTestContext) {
        let default_path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        assert!(default_path.starts_with(ctx.temp_dir.path()));
        assert_eq!(Db::resolve_path().unwrap(), default_path);

        let game = Game::new().unwrap();
        game.add_quest("Find the charger", Difficulty::Easy).unwrap();
        assert!(default_path.exists());

        // A configured path wins over the data directory
        let custom_path = ctx.temp_dir.path().join("custom.db");
        Config {
            database: Some(DatabaseConfig {
                path: Some(custom_path.to_string_lossy().to_string()),
            }),
            pacing: None,
        }
        .save()
        .unwrap();
        assert_eq!(Db::resolve_path().unwrap(), custom_path);

        let game = Game::new().unwrap();
        assert!(game.list_pending().unwrap().is_empty());
        assert!(custom_path.exists());

        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
        assert_eq!(Db::resolve_path().unwrap(), default_path);
    }
}
