#[cfg(test)]
mod tests {
    use neuro_os::commands::{add, complete, report_game_error};
    use neuro_os::libs::error::GameError;
    use neuro_os::libs::game::Game;
    use neuro_os::libs::quest::Difficulty;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommandTestContext {
        _temp_dir: TempDir,
        game: Game,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let game = Game::open(temp_dir.path().join("commands.db")).unwrap();
            CommandTestContext { _temp_dir: temp_dir, game }
        }
    }

    #[test]
    fn test_rule_violations_are_recoverable() {
        assert!(GameError::InsufficientMana { required: 30, available: 10 }.is_recoverable());
        assert!(GameError::QuestNotFound(7).is_recoverable());
        assert!(GameError::QuestAlreadyCompleted(7).is_recoverable());
        assert!(GameError::EmptyDescription.is_recoverable());
        assert!(!GameError::Storage(rusqlite::Error::QueryReturnedNoRows).is_recoverable());
    }

    #[test]
    fn test_reported_rule_violation_is_not_a_failure() {
        assert!(report_game_error(GameError::InsufficientMana { required: 60, available: 40 }).is_ok());
        assert!(report_game_error(GameError::QuestNotFound(42)).is_ok());
    }

    #[test]
    fn test_storage_error_propagates() {
        let error = report_game_error(GameError::Storage(rusqlite::Error::QueryReturnedNoRows)).unwrap_err();
        assert!(error.to_string().starts_with("Database error"));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_blocked_completion_exits_cleanly(ctx: &mut CommandTestContext) {
        ctx.game.apply_delta(0, -90).unwrap();
        let id = ctx.game.add_quest("Deploy the release", Difficulty::Hard).unwrap();

        assert!(complete::complete_quest(&mut ctx.game, id).is_ok());
        assert!(complete::complete_quest(&mut ctx.game, id + 1).is_ok());

        let player = ctx.game.get_player().unwrap();
        assert_eq!(player.mana, 10);
        assert_eq!(player.experience, 0);
        assert_eq!(ctx.game.list_pending().unwrap().len(), 1);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_empty_quest_exits_cleanly(ctx: &mut CommandTestContext) {
        assert!(add::add_quest(&ctx.game, "   ", Difficulty::Easy).is_ok());
        assert!(ctx.game.list_pending().unwrap().is_empty());

        assert!(add::add_quest(&ctx.game, "Water the plants", Difficulty::Easy).is_ok());
        assert_eq!(ctx.game.list_pending().unwrap().len(), 1);
    }
}
