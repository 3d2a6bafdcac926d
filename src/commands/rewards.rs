use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    msg_print!(Message::RewardTableHeader, true);
    View::rewards()
}
