use crate::libs::player::{LedgerChange, Player};
use rusqlite::{params, Connection, Result};
use tracing::debug;

const SELECT_PLAYER: &str = "SELECT xp, level, mana, streak FROM player WHERE id = 1";
const UPDATE_PLAYER: &str = "UPDATE player SET xp = ?1, level = ?2, mana = ?3 WHERE id = 1";

/// Read/write access to the singleton player row.
///
/// Borrows the connection so it can run inside a transaction shared with
/// [`crate::db::quests::QuestStore`].
pub struct Ledger<'c> {
    conn: &'c Connection,
}

impl<'c> Ledger<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self) -> Result<Player> {
        self.conn.query_row(SELECT_PLAYER, [], |row| {
            Ok(Player {
                experience: row.get(0)?,
                level: row.get(1)?,
                mana: row.get(2)?,
                streak: row.get(3)?,
            })
        })
    }

    /// Adds experience and changes mana, recomputing level and clamping mana.
    /// The three fields are written in one statement.
    pub fn apply_delta(&self, experience_delta: u32, mana_delta: i32) -> Result<LedgerChange> {
        let before = self.get()?;
        let after = before.with_delta(experience_delta, mana_delta);

        self.conn.execute(UPDATE_PLAYER, params![after.experience, after.level, after.mana])?;
        debug!(
            xp = after.experience,
            level = after.level,
            mana = after.mana,
            "player updated (+{} xp, {:+} mana)",
            experience_delta,
            mana_delta
        );

        Ok(LedgerChange { before, after })
    }
}
