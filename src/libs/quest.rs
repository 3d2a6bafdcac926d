//! Quest model, difficulty tiers and the reward table.

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Boss,
}

/// Experience gained and mana change applied when a quest is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub xp: u32,
    /// Always negative or zero: completing a quest costs mana.
    pub mana: i32,
}

impl Reward {
    /// Mana spent, as a positive number.
    pub fn cost(&self) -> i64 {
        -i64::from(self.mana)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty '{0}', expected one of: easy, medium, hard, boss")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Boss];

    pub fn reward(&self) -> Reward {
        match self {
            Difficulty::Easy => Reward { xp: 50, mana: -5 },
            Difficulty::Medium => Reward { xp: 100, mana: -15 },
            Difficulty::Hard => Reward { xp: 300, mana: -30 },
            Difficulty::Boss => Reward { xp: 1000, mana: -60 },
        }
    }

    /// Canonical name, also the value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Boss => "Boss",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
            Difficulty::Boss => "🟣",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Case-insensitive; the Portuguese labels of older databases are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Ok(Difficulty::Easy),
            "medium" | "médio" | "medio" => Ok(Difficulty::Medium),
            "hard" | "difícil" | "dificil" => Ok(Difficulty::Hard),
            "boss" => Ok(Difficulty::Boss),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

impl ToSql for Difficulty {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Difficulty {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    Pending,
    Completed,
}

impl QuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::Pending => "pending",
            QuestStatus::Completed => "completed",
        }
    }
}

impl FromSql for QuestStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "pending" => Ok(QuestStatus::Pending),
            "completed" => Ok(QuestStatus::Completed),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl ToSql for QuestStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub id: i64,
    pub description: String,
    pub difficulty: Difficulty,
    pub status: QuestStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Quest {
    pub fn is_pending(&self) -> bool {
        self.status == QuestStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_table() {
        assert_eq!(Difficulty::Easy.reward(), Reward { xp: 50, mana: -5 });
        assert_eq!(Difficulty::Medium.reward(), Reward { xp: 100, mana: -15 });
        assert_eq!(Difficulty::Hard.reward(), Reward { xp: 300, mana: -30 });
        assert_eq!(Difficulty::Boss.reward(), Reward { xp: 1000, mana: -60 });
        assert_eq!(Difficulty::Boss.reward().cost(), 60);
    }

    #[test]
    fn parses_names_and_legacy_labels() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("Fácil".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Médio".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("Difícil".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" boss ".parse::<Difficulty>().unwrap(), Difficulty::Boss);
        assert!("legendary".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_uses_canonical_name() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>().unwrap(), difficulty);
        }
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
