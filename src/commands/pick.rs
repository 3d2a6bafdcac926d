//! Dopamine roulette: an antidote for decision paralysis.
//!
//! Picks one pending quest at random and presents it as the only thing to do
//! right now. Picking does not change the quest.

use crate::libs::config::PacingConfig;
use crate::libs::game::Game;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use std::thread;

pub fn cmd(game: &Game, pacing: &PacingConfig) -> Result<()> {
    msg_print!(Message::RouletteHeader, true);
    msg_print!(Message::RouletteInstructions);

    let Some(quest) = game.pick_random_pending()? else {
        msg_warning!(Message::RouletteNoQuests);
        return Ok(());
    };

    msg_info!(Message::RouletteSpinning);
    thread::sleep(pacing.roulette_delay());

    msg_success!(Message::MissionSelected, true);
    View::mission(&quest)?;
    msg_info!(Message::MissionRule);

    Ok(())
}
