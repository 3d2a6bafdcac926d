use thiserror::Error;

/// Errors raised by game operations.
///
/// Only `Storage` is fatal; the rest leave state untouched and are reported
/// to the player as blocking messages.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Insufficient mana: this quest costs {required}, you have {available}. Rest before taking it on.")]
    InsufficientMana { required: i64, available: i64 },

    #[error("Quest with ID {0} not found")]
    QuestNotFound(i64),

    #[error("Quest with ID {0} is already completed")]
    QuestAlreadyCompleted(i64),

    #[error("Quest description cannot be empty")]
    EmptyDescription,

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl GameError {
    /// Whether the error is a rule violation the player can act on, as opposed
    /// to a storage failure.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Storage(_))
    }
}
