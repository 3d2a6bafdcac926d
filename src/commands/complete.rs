//! Quest completion command.
//!
//! Pays out the quest's reward. When the mana pool cannot cover the cost the
//! player is told to rest first and nothing changes.

use super::report_game_error;
use crate::libs::game::{Completion, Game};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// ID of the quest, as shown on the quest board
    #[arg(required = true)]
    id: i64,
}

pub fn cmd(game: &mut Game, args: CompleteArgs) -> Result<()> {
    complete_quest(game, args.id)
}

pub fn complete_quest(game: &mut Game, id: i64) -> Result<()> {
    match game.complete_quest(id) {
        Ok(completion) => {
            announce(&completion);
            Ok(())
        }
        Err(error) => report_game_error(error),
    }
}

fn announce(completion: &Completion) {
    msg_success!(Message::QuestCompleted(completion.quest.description.clone()));
    msg_success!(Message::QuestRewardToast(completion.change.xp_gained(), completion.reward.cost()));

    if completion.change.leveled_up() {
        msg_success!(Message::LevelUp(completion.change.after.level), true);
    }
}
