//! Display text for every [`Message`].
//!
//! All user-facing wording lives in this one match, so commands only ever
//! name a message and its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PLAYER MESSAGES ===
            Message::HudHeader(level) => format!("🧠 Pilot: Level {}", level),
            Message::ManaOverloadWarning => "ALERT: Overload is close. Prioritize low-cost quests or rest.".to_string(),
            Message::LevelUp(level) => format!("🏆 LEVEL UP! You are now Level {}!", level),
            Message::ManaRecovering => "Regulating sensory system...".to_string(),
            Message::ManaRecovered(gained, mana) => format!("🔋 Mana recovered! +{} Energy ({}%)", gained, mana),

            // === QUEST MESSAGES ===
            Message::QuestBoardHeader => "📜 Quest Board".to_string(),
            Message::QuestBoardEmpty => "🎉 Nothing pending! Your system is clean. Create new goals or rest.".to_string(),
            Message::QuestCreated(id, description) => format!("Quest #{} registered: {}", id, description),
            Message::QuestCompleted(description) => format!("Quest completed: {}", description),
            Message::QuestRewardToast(xp, mana) => format!("+{} XP | -{} Mana", xp, mana),
            Message::QuestBlocked(reason) => reason.to_string(),
            Message::QuestsCompletedCount(count) => format!("Quests completed so far: {}", count),
            Message::RewardTableHeader => "Rewards by difficulty".to_string(),

            // === ROULETTE MESSAGES ===
            Message::RouletteHeader => "🎲 The Chaos Oracle".to_string(),
            Message::RouletteInstructions => "Stuck? The system picks ONE quest for you. Your only job is to follow the algorithm for 20 minutes.".to_string(),
            Message::RouletteSpinning => "The algorithm is weighing the odds...".to_string(),
            Message::RouletteNoQuests => "You need to add quests to the backlog first!".to_string(),
            Message::MissionSelected => "🎯 MISSION SELECTED:".to_string(),
            Message::MissionRule => "💡 Rule: Don't think. Just do this quest now.".to_string(),

            // === PLAY MENU ===
            Message::PlayMenuPrompt => "What now?".to_string(),
            Message::PlayMenuBoard => "📜 Quest board".to_string(),
            Message::PlayMenuComplete => "⚔️  Complete a quest".to_string(),
            Message::PlayMenuRoulette => "🔮 Spin the roulette".to_string(),
            Message::PlayMenuAdd => "📥 New quest".to_string(),
            Message::PlayMenuRecover => "🧘 Meditate / Stim / Pause (recover mana)".to_string(),
            Message::PlayMenuRewards => "📖 Reward table".to_string(),
            Message::PlayMenuQuit => "🚪 Quit".to_string(),
            Message::SelectQuestToComplete => "Select quest to complete".to_string(),
            Message::PlayGoodbye => "Session closed. See you next run.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigNothingToDelete => "No configuration file to remove".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModulePacing => "Pacing settings (0 disables a delay)".to_string(),
            Message::ConfigInvalid(path, error) => format!("Invalid configuration in {}: {}. Fix the file or run `neuro init --delete`.", path, error),
            Message::ConfigWriteFailed(path, error) => format!("Could not write configuration to {}: {}", path, error),

            // === PROMPTS ===
            Message::PromptQuestDescription => "Quest description".to_string(),
            Message::PromptQuestDifficulty => "Energy required".to_string(),
            Message::PromptDatabasePath => "Database file path (empty for default)".to_string(),
            Message::PromptRecoveryDelay => "Recovery delay (milliseconds)".to_string(),
            Message::PromptRouletteDelay => "Roulette delay (milliseconds)".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),

            // === GENERAL MESSAGES ===
            Message::Footer(title, version) => format!("{} v{} | Running in a safe environment.", title, version),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
        };
        write!(f, "{}", text)
    }
}
