//! Interactive session.
//!
//! Shows the HUD, asks for one action, runs it and starts over, until the
//! player quits. Each action maps to exactly one game operation.

use super::{add, complete, pick, quests, recover, rewards};
use crate::libs::config::PacingConfig;
use crate::libs::game::Game;
use crate::libs::messages::Message;
use crate::libs::quest::Difficulty;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Board,
    Complete,
    Roulette,
    Add,
    Recover,
    Rewards,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Board,
        Action::Complete,
        Action::Roulette,
        Action::Add,
        Action::Recover,
        Action::Rewards,
        Action::Quit,
    ];

    fn label(&self) -> Message {
        match self {
            Action::Board => Message::PlayMenuBoard,
            Action::Complete => Message::PlayMenuComplete,
            Action::Roulette => Message::PlayMenuRoulette,
            Action::Add => Message::PlayMenuAdd,
            Action::Recover => Message::PlayMenuRecover,
            Action::Rewards => Message::PlayMenuRewards,
            Action::Quit => Message::PlayMenuQuit,
        }
    }
}

pub fn cmd(game: &mut Game, pacing: &PacingConfig) -> Result<()> {
    let labels: Vec<String> = Action::ALL.iter().map(|action| action.label().to_string()).collect();

    loop {
        View::player(&game.get_player()?)?;

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PlayMenuPrompt.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[selection] {
            Action::Board => quests::cmd(game)?,
            Action::Complete => select_and_complete(game)?,
            Action::Roulette => pick::cmd(game, pacing)?,
            Action::Add => prompt_and_add(game)?,
            Action::Recover => recover::cmd(game, pacing)?,
            Action::Rewards => rewards::cmd()?,
            Action::Quit => break,
        }
    }

    msg_print!(Message::PlayGoodbye, true);
    View::footer();
    Ok(())
}

fn select_and_complete(game: &mut Game) -> Result<()> {
    let pending = game.list_pending()?;
    if pending.is_empty() {
        msg_success!(Message::QuestBoardEmpty);
        return Ok(());
    }

    let items: Vec<String> = pending
        .iter()
        .map(|quest| format!("{} {} ({}, -{} mana)", quest.difficulty.marker(), quest.description, quest.difficulty, quest.difficulty.reward().cost()))
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectQuestToComplete.to_string())
        .items(&items)
        .interact()?;

    complete::complete_quest(game, pending[selection].id)
}

fn prompt_and_add(game: &Game) -> Result<()> {
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptQuestDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let difficulties: Vec<String> = Difficulty::ALL
        .iter()
        .map(|difficulty| format!("{} {} (-{} mana)", difficulty.marker(), difficulty, difficulty.reward().cost()))
        .collect();
    let default = Difficulty::ALL.iter().position(|difficulty| *difficulty == Difficulty::default()).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptQuestDifficulty.to_string())
        .items(&difficulties)
        .default(default)
        .interact()?;

    add::add_quest(game, &description, Difficulty::ALL[selection])
}
