#[cfg(test)]
mod tests {
    use neuro_os::db::db::Db;
    use neuro_os::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use neuro_os::libs::game::Game;
    use neuro_os::libs::quest::Difficulty;
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("migrations.db");
            MigrationTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 2);
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert_eq!(history[0].1, "create_game_tables");
        assert!(manager.is_migration_applied(&conn, 2).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);

        // Exactly one player row no matter how often the schema is checked
        let players: i64 = conn.query_row("SELECT COUNT(*) FROM player", [], |row| row.get(0)).unwrap();
        assert_eq!(players, 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(&ctx.db_path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_unreadable_database_is_an_error(ctx: &mut MigrationTestContext) {
        std::fs::write(&ctx.db_path, vec![0x42u8; 4096]).unwrap();

        let mut conn = Connection::open(&ctx.db_path).unwrap();
        assert!(get_db_version(&conn).is_err());
        assert!(needs_migration(&conn).is_err());
        assert!(MigrationManager::new().run_migrations(&mut conn).is_err());
        assert!(Db::open(&ctx.db_path).is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_existing_database_is_adopted(ctx: &mut MigrationTestContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute_batch(
                "CREATE TABLE tasks (id INTEGER PRIMARY KEY, task TEXT, difficulty TEXT, status TEXT, created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP);
                 CREATE TABLE player (id INTEGER PRIMARY KEY, xp INTEGER, level INTEGER, mana INTEGER, streak INTEGER);
                 INSERT INTO player (xp, level, mana, streak) VALUES (1250, 2, 35, 0);
                 INSERT INTO tasks (task, difficulty, status) VALUES ('Configurar o Docker', 'Difícil', 'pending');
                 INSERT INTO tasks (task, difficulty, status) VALUES ('Lavar louça', 'Fácil', 'completed');
                 INSERT INTO tasks (task, difficulty, status) VALUES ('Ler e-mails', 'Médio', 'pending');",
            )
            .unwrap();
        }

        let mut game = Game::open(&ctx.db_path).unwrap();

        let player = game.get_player().unwrap();
        assert_eq!(player.experience, 1250);
        assert_eq!(player.mana, 35);

        let pending = game.list_pending().unwrap();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].difficulty, Difficulty::Medium);
        assert_eq!(pending[1].difficulty, Difficulty::Hard);

        let completion = game.complete_quest(pending[1].id).unwrap();
        assert_eq!(completion.change.after.mana, 5);
        assert_eq!(completion.change.after.experience, 1550);
    }

    #[cfg(debug_assertions)]
    #[test_context(MigrationTestContext)]
    #[test]
    fn test_rollback_forgets_versions(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        manager.rollback_to(&mut conn, 1).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
        assert!(needs_migration(&conn).unwrap());

        // Index creation is IF NOT EXISTS, so re-applying is safe
        manager.run_migrations(&mut conn).unwrap();
        assert!(!needs_migration(&conn).unwrap());
    }
}
