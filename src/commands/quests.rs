use crate::libs::game::Game;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;

pub fn cmd(game: &Game) -> Result<()> {
    let quests = game.list_pending()?;

    if quests.is_empty() {
        msg_success!(Message::QuestBoardEmpty);
        return Ok(());
    }

    msg_print!(Message::QuestBoardHeader, true);
    View::quests(&quests)?;

    Ok(())
}
