//! Quest registration command.
//!
//! Gets the task out of working memory and into the backlog. The difficulty
//! defaults to Medium and decides both the reward and the mana cost later on.

use super::report_game_error;
use crate::libs::game::Game;
use crate::libs::messages::Message;
use crate::libs::quest::Difficulty;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// What needs to be done
    #[arg(required = true)]
    description: String,

    /// Energy required: easy, medium, hard or boss
    #[arg(short, long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,
}

pub fn cmd(game: &Game, args: AddArgs) -> Result<()> {
    add_quest(game, &args.description, args.difficulty)
}

pub fn add_quest(game: &Game, description: &str, difficulty: Difficulty) -> Result<()> {
    match game.add_quest(description, difficulty) {
        Ok(id) => {
            msg_success!(Message::QuestCreated(id, description.trim().to_string()));
            Ok(())
        }
        Err(error) => report_game_error(error),
    }
}
