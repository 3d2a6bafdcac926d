use crate::libs::quest::{Difficulty, Quest, QuestStatus};
use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use tracing::debug;

const INSERT_QUEST: &str = "INSERT INTO tasks (task, difficulty, status) VALUES (?1, ?2, ?3)";
const SELECT_QUESTS: &str = "SELECT id, task, difficulty, status, created_at FROM tasks";
const WHERE_STATUS: &str = "WHERE status = ?1";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_NEWEST_FIRST: &str = "ORDER BY id DESC";
const COMPLETE_QUEST: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1 AND status = ?3";
const COUNT_BY_STATUS: &str = "SELECT COUNT(*) FROM tasks WHERE status = ?1";

/// Quest persistence over the `tasks` table.
///
/// Rows are only ever inserted or moved from pending to completed.
pub struct QuestStore<'c> {
    conn: &'c Connection,
}

impl<'c> QuestStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Inserts a pending quest and returns its id. The description is stored as given.
    pub fn insert(&self, description: &str, difficulty: Difficulty) -> Result<i64> {
        self.conn.execute(INSERT_QUEST, params![description, difficulty, QuestStatus::Pending])?;
        let id = self.conn.last_insert_rowid();
        debug!(id, %difficulty, "quest added");

        Ok(id)
    }

    /// Pending quests, most recently created first.
    pub fn list_pending(&self) -> Result<Vec<Quest>> {
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_QUESTS, WHERE_STATUS, ORDER_NEWEST_FIRST))?;
        let quest_iter = stmt.query_map(params![QuestStatus::Pending], Self::row_to_quest)?;

        let mut quests = Vec::new();
        for quest in quest_iter {
            quests.push(quest?);
        }
        Ok(quests)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Quest>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_QUESTS, WHERE_ID), params![id], Self::row_to_quest)
            .optional()
    }

    /// Moves a pending quest to completed. Returns the number of rows changed,
    /// 0 when the quest does not exist or is already completed.
    pub fn mark_completed(&self, id: i64) -> Result<usize> {
        self.conn.execute(COMPLETE_QUEST, params![id, QuestStatus::Completed, QuestStatus::Pending])
    }

    pub fn count(&self, status: QuestStatus) -> Result<i64> {
        self.conn.query_row(COUNT_BY_STATUS, params![status], |row| row.get(0))
    }

    /// One pending quest chosen uniformly at random, `None` when the board is empty.
    pub fn pick_random_pending<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<Quest>> {
        let mut pending = self.list_pending()?;
        if pending.is_empty() {
            return Ok(None);
        }

        let index = rng.gen_range(0..pending.len());
        Ok(Some(pending.swap_remove(index)))
    }

    fn row_to_quest(row: &Row<'_>) -> Result<Quest> {
        Ok(Quest {
            id: row.get(0)?,
            description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            difficulty: row.get(2)?,
            status: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
