use super::messages::Message;
use super::player::Player;
use super::quest::{Difficulty, Quest};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use prettytable::{row, Table};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const BAR_WIDTH: usize = 20;

pub struct View {}

impl View {
    /// Player HUD: level, experience progress and the mana pool.
    pub fn player(player: &Player) -> Result<()> {
        msg_print!(Message::HudHeader(player.level), true);

        let mut table = Table::new();
        table.add_row(row!["XP", player.experience, Self::bar(player.level_progress()), format!("{} to next level", player.xp_to_next_level())]);
        table.add_row(row!["MANA", format!("{}%", player.mana), Self::bar(player.mana_fraction()), ""]);
        table.printstd();

        if player.is_overloaded() {
            msg_warning!(Message::ManaOverloadWarning);
        }

        Ok(())
    }

    pub fn quests(quests: &[Quest]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "", "QUEST", "RANK", "REWARD", "CREATED"]);
        for quest in quests {
            let reward = quest.difficulty.reward();
            table.add_row(row![
                quest.id,
                quest.difficulty.marker(),
                quest.description,
                quest.difficulty,
                format!("+{} XP / -{} Mana", reward.xp, reward.cost()),
                quest
                    .created_at
                    .map(|created_at| created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// The quest picked by the roulette, shown on its own.
    pub fn mission(quest: &Quest) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row![format!("{} {}", quest.difficulty.marker(), quest.description)]);
        table.add_row(row![format!("Difficulty: {} (#{})", quest.difficulty, quest.id)]);
        table.printstd();

        Ok(())
    }

    pub fn rewards() -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "DIFFICULTY", "XP", "MANA"]);
        for difficulty in Difficulty::ALL {
            let reward = difficulty.reward();
            table.add_row(row![difficulty.marker(), difficulty, format!("+{}", reward.xp), reward.mana]);
        }
        table.printstd();

        Ok(())
    }

    pub fn footer() {
        msg_print!(Message::Footer(APP_METADATA_TITLE.to_string(), APP_METADATA_VERSION.to_string()));
    }

    fn bar(fraction: f64) -> String {
        let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round()) as usize;
        format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
    }
}
