//! Player HUD command.

use crate::libs::game::Game;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd(game: &Game) -> Result<()> {
    let player = game.get_player()?;
    View::player(&player)?;

    msg_print!(Message::QuestsCompletedCount(game.count_completed()?));
    View::footer();

    Ok(())
}
