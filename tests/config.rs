#[cfg(test)]
mod tests {
    use neuro_os::libs::config::{Config, DatabaseConfig, PacingConfig};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(ctx.temp_dir.path().join("config.json")).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.database.is_none());
        assert_eq!(config.pacing(), PacingConfig::default());
        assert_eq!(config.pacing().recovery_delay(), Duration::from_millis(1500));
        assert_eq!(config.pacing().roulette_delay(), Duration::from_millis(2000));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            database: Some(DatabaseConfig {
                path: Some("/tmp/quests.db".to_string()),
            }),
            pacing: Some(PacingConfig::instant()),
        };

        config.save_to(&path).unwrap();
        let loaded = Config::read_from(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.pacing().recovery_delay(), Duration::ZERO);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_modules_are_not_written(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        Config::default().save_to(&path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(!json.contains("database"));
        assert!(!json.contains("pacing"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "pacing": { "recovery_delay_ms": 0, "roulette_delay_ms": 250 } }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert!(config.database.is_none());
        assert_eq!(config.pacing().roulette_delay(), Duration::from_millis(250));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let error = Config::read_from(&path).unwrap_err().to_string();
        assert!(error.starts_with("Invalid configuration in"));
        assert!(error.contains("config.json"));
        assert!(error.contains("neuro init --delete"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_into_missing_directory(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("missing").join("config.json");

        let error = Config::default().save_to(&path).unwrap_err().to_string();
        assert!(error.starts_with("Could not write configuration to"));
        assert!(error.contains("missing"));
        assert!(!path.exists());
    }
}
