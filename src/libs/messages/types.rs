#[derive(Debug, Clone)]
pub enum Message {
    // === PLAYER MESSAGES ===
    HudHeader(i64),                 // level
    ManaOverloadWarning,
    LevelUp(i64),                   // new level
    ManaRecovering,
    ManaRecovered(i64, i64),        // gained, current

    // === QUEST MESSAGES ===
    QuestBoardHeader,
    QuestBoardEmpty,
    QuestCreated(i64, String),      // id, description
    QuestCompleted(String),         // description
    QuestRewardToast(i64, i64),     // xp gained, mana spent
    QuestBlocked(String),           // reason
    QuestsCompletedCount(i64),
    RewardTableHeader,

    // === ROULETTE MESSAGES ===
    RouletteHeader,
    RouletteInstructions,
    RouletteSpinning,
    RouletteNoQuests,
    MissionSelected,
    MissionRule,

    // === PLAY MENU ===
    PlayMenuPrompt,
    PlayMenuBoard,
    PlayMenuComplete,
    PlayMenuRoulette,
    PlayMenuAdd,
    PlayMenuRecover,
    PlayMenuRewards,
    PlayMenuQuit,
    SelectQuestToComplete,
    PlayGoodbye,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNothingToDelete,
    ConfigModuleDatabase,
    ConfigModulePacing,
    ConfigInvalid(String, String),  // path, parse error
    ConfigWriteFailed(String, String), // path, io error

    // === PROMPTS ===
    PromptQuestDescription,
    PromptQuestDifficulty,
    PromptDatabasePath,
    PromptRecoveryDelay,
    PromptRouletteDelay,
    PromptSelectModules,

    // === GENERAL MESSAGES ===
    Footer(String, String),         // title, version

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),         // count
    RunningMigration(u32, String),  // version, name
    MigrationCompleted(u32),        // version
    MigrationFailed(u32, String),   // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),          // from, to
    RollbackCompleted(u32),         // version
}
