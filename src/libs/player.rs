//! Player state and the arithmetic behind it.
//!
//! The player is a single record holding experience, a level derived from it,
//! a bounded mana pool and an (unused) streak counter. Everything here is pure:
//! persistence lives in [`crate::db::player`], which reads a [`Player`], asks it
//! for the next state via [`Player::with_delta`] and writes the result back.
//!
//! ## Rules
//!
//! - `level = 1 + floor(experience / 1000)`, never stored independently
//! - `mana` is clamped to `[0, 100]` after every change
//! - a level-up is a strict increase of the derived level

use super::quest::Reward;

/// Experience needed per level.
pub const XP_PER_LEVEL: i64 = 1000;

/// Lower bound of the mana pool.
pub const MANA_MIN: i64 = 0;

/// Upper bound of the mana pool, also the starting mana.
pub const MANA_MAX: i64 = 100;

/// Mana restored by a single recovery action.
pub const MANA_RECOVERY: i32 = 20;

/// Below this mana the HUD warns about overload.
pub const OVERLOAD_THRESHOLD: i64 = 30;

/// Level for a given amount of experience.
pub fn level_for_xp(experience: i64) -> i64 {
    1 + experience.max(0) / XP_PER_LEVEL
}

pub fn clamp_mana(mana: i64) -> i64 {
    mana.clamp(MANA_MIN, MANA_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub experience: i64,
    pub level: i64,
    pub mana: i64,
    pub streak: i64,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            experience: 0,
            level: 1,
            mana: MANA_MAX,
            streak: 0,
        }
    }
}

impl Player {
    /// Computes the state after gaining `experience_delta` and changing mana
    /// by `mana_delta`. Level is recomputed and mana clamped; streak is kept.
    pub fn with_delta(&self, experience_delta: u32, mana_delta: i32) -> Player {
        let experience = self.experience + i64::from(experience_delta);

        Player {
            experience,
            level: level_for_xp(experience),
            mana: clamp_mana(self.mana + i64::from(mana_delta)),
            streak: self.streak,
        }
    }

    /// Whether the mana pool covers the cost of a reward without going negative.
    pub fn can_afford(&self, reward: &Reward) -> bool {
        self.mana + i64::from(reward.mana) >= MANA_MIN
    }

    /// Experience collected since the current level started.
    pub fn xp_into_level(&self) -> i64 {
        self.experience.max(0) % XP_PER_LEVEL
    }

    pub fn xp_to_next_level(&self) -> i64 {
        XP_PER_LEVEL - self.xp_into_level()
    }

    /// Progress through the current level in `[0, 1)`.
    pub fn level_progress(&self) -> f64 {
        self.xp_into_level() as f64 / XP_PER_LEVEL as f64
    }

    pub fn mana_fraction(&self) -> f64 {
        self.mana as f64 / MANA_MAX as f64
    }

    pub fn is_overloaded(&self) -> bool {
        self.mana < OVERLOAD_THRESHOLD
    }
}

/// Result of a single ledger update.
///
/// Carries both snapshots so callers can decide on notifications (level-up,
/// toast text) without another read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerChange {
    pub before: Player,
    pub after: Player,
}

impl LedgerChange {
    pub fn leveled_up(&self) -> bool {
        self.after.level > self.before.level
    }

    pub fn xp_gained(&self) -> i64 {
        self.after.experience - self.before.experience
    }

    /// Actual mana change after clamping, which can differ from the requested delta.
    pub fn mana_change(&self) -> i64 {
        self.after.mana - self.before.mana
    }
}
