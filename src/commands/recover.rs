//! Mana recovery: a sensory regulation break.

use crate::libs::config::PacingConfig;
use crate::libs::game::Game;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use std::thread;

pub fn cmd(game: &Game, pacing: &PacingConfig) -> Result<()> {
    msg_info!(Message::ManaRecovering);
    thread::sleep(pacing.recovery_delay());

    let change = game.recover_mana()?;
    msg_success!(Message::ManaRecovered(change.mana_change(), change.after.mana));

    Ok(())
}
