pub mod add;
pub mod complete;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod pick;
pub mod play;
pub mod quests;
pub mod recover;
pub mod rewards;
pub mod status;

use crate::libs::config::{Config, PacingConfig};
use crate::libs::error::GameError;
use crate::libs::game::Game;
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show level, experience and mana")]
    Status,
    #[command(about = "Register a new quest")]
    Add(add::AddArgs),
    #[command(about = "Show the quest board")]
    Quests,
    #[command(about = "Complete a quest and collect its reward")]
    Complete(complete::CompleteArgs),
    #[command(about = "Let the roulette pick your next quest")]
    Pick,
    #[command(about = "Rest and recover mana")]
    Recover,
    #[command(about = "Show rewards and mana costs by difficulty")]
    Rewards,
    #[command(about = "Interactive session")]
    Play,
    #[cfg(debug_assertions)]
    #[command(about = "Database migrations (debug builds only)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Rewards => rewards::cmd(),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
            Commands::Status => with_game(|game, _| status::cmd(game)),
            Commands::Add(args) => with_game(|game, _| add::cmd(game, args)),
            Commands::Quests => with_game(|game, _| quests::cmd(game)),
            Commands::Complete(args) => with_game(|game, _| complete::cmd(game, args)),
            Commands::Pick => with_game(|game, pacing| pick::cmd(game, pacing)),
            Commands::Recover => with_game(|game, pacing| recover::cmd(game, pacing)),
            Commands::Play => with_game(play::cmd),
        }
    }
}

/// Opens the game on the configured database and hands it to `run`
/// together with the configured pacing.
fn with_game<F>(run: F) -> Result<()>
where
    F: FnOnce(&mut Game, &PacingConfig) -> Result<()>,
{
    let pacing = Config::read()?.pacing();
    let mut game = Game::new()?;

    run(&mut game, &pacing)
}

/// Reports rule violations to the player and lets storage failures propagate.
pub fn report_game_error(error: GameError) -> Result<()> {
    if error.is_recoverable() {
        msg_error!(Message::QuestBlocked(error.to_string()));
        return Ok(());
    }

    Err(error.into())
}
