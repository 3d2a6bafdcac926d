//! The game service: every player-facing operation goes through [`Game`].
//!
//! `Game` owns the database handle and is built once per process. The
//! presentation layer calls one operation per user action, inspects the
//! returned value (level-up, completion details, picked quest) and re-renders.
//! Nothing here prints; notifications are the caller's job.
//!
//! ## Example
//!
//! ```rust,no_run
//! use neuro_os::libs::game::Game;
//! use neuro_os::libs::quest::Difficulty;
//!
//! let mut game = Game::new()?;
//! let id = game.add_quest("Write the quarterly report", Difficulty::Hard)?;
//! let completion = game.complete_quest(id)?;
//! if completion.change.leveled_up() {
//!     println!("Level {}!", completion.change.after.level);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::error::GameError;
use super::player::{LedgerChange, Player, MANA_RECOVERY};
use super::quest::{Difficulty, Quest, QuestStatus, Reward};
use crate::db::db::Db;
use crate::db::player::Ledger;
use crate::db::quests::QuestStore;
use rand::Rng;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a successful quest completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub quest: Quest,
    pub reward: Reward,
    pub change: LedgerChange,
}

pub struct Game {
    db: Db,
}

impl Game {
    /// Opens the game on the configured database.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    /// Opens the game on the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { db }
    }

    pub fn get_player(&self) -> Result<Player, GameError> {
        Ok(Ledger::new(&self.db.conn).get()?)
    }

    /// Applies a raw experience/mana change to the player.
    pub fn apply_delta(&self, experience_delta: u32, mana_delta: i32) -> Result<LedgerChange, GameError> {
        Ok(Ledger::new(&self.db.conn).apply_delta(experience_delta, mana_delta)?)
    }

    /// Restores [`MANA_RECOVERY`] mana, capped at the pool maximum.
    pub fn recover_mana(&self) -> Result<LedgerChange, GameError> {
        let change = self.apply_delta(0, MANA_RECOVERY)?;
        info!(mana = change.after.mana, "mana recovered");
        Ok(change)
    }

    /// Adds a pending quest. Surrounding whitespace is trimmed and an empty
    /// description is rejected before anything is written.
    pub fn add_quest(&self, description: &str, difficulty: Difficulty) -> Result<i64, GameError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GameError::EmptyDescription);
        }

        Ok(QuestStore::new(&self.db.conn).insert(description, difficulty)?)
    }

    /// Pending quests, newest first.
    pub fn list_pending(&self) -> Result<Vec<Quest>, GameError> {
        Ok(QuestStore::new(&self.db.conn).list_pending()?)
    }

    pub fn count_completed(&self) -> Result<i64, GameError> {
        Ok(QuestStore::new(&self.db.conn).count(QuestStatus::Completed)?)
    }

    /// Completes a pending quest and pays out its reward.
    ///
    /// The reward comes from the quest's stored difficulty. If the mana pool
    /// cannot cover the cost the call fails with
    /// [`GameError::InsufficientMana`] and nothing changes. The status update
    /// and the ledger update commit together.
    pub fn complete_quest(&mut self, id: i64) -> Result<Completion, GameError> {
        let tx = self.db.conn.transaction()?;

        let (quest, reward, change) = {
            let quests = QuestStore::new(&tx);
            let ledger = Ledger::new(&tx);

            let mut quest = quests.get_by_id(id)?.ok_or(GameError::QuestNotFound(id))?;
            if !quest.is_pending() {
                return Err(GameError::QuestAlreadyCompleted(id));
            }

            let reward = quest.difficulty.reward();
            let player = ledger.get()?;
            if !player.can_afford(&reward) {
                debug!(id, mana = player.mana, cost = reward.cost(), "quest blocked by mana");
                return Err(GameError::InsufficientMana {
                    required: reward.cost(),
                    available: player.mana,
                });
            }

            if quests.mark_completed(id)? == 0 {
                return Err(GameError::QuestAlreadyCompleted(id));
            }
            let change = ledger.apply_delta(reward.xp, reward.mana)?;
            quest.status = QuestStatus::Completed;

            (quest, reward, change)
        };

        tx.commit()?;
        info!(id, xp = change.after.experience, mana = change.after.mana, "quest completed");

        Ok(Completion { quest, reward, change })
    }

    /// A uniformly random pending quest, `None` when there is nothing to pick.
    pub fn pick_random_pending(&self) -> Result<Option<Quest>, GameError> {
        self.pick_random_pending_with(&mut rand::thread_rng())
    }

    /// Same as [`Game::pick_random_pending`] with a caller-provided RNG.
    pub fn pick_random_pending_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<Quest>, GameError> {
        Ok(QuestStore::new(&self.db.conn).pick_random_pending(rng)?)
    }
}
