//! Database layer for Neuro-OS.
//!
//! A single SQLite file holds the whole game: the `player` row and the
//! `tasks` table of quests. [`db::Db`] owns the connection and applies
//! migrations on open; [`player::Ledger`] and [`quests::QuestStore`] borrow
//! that connection (or a transaction on it) to read and write their table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neuro_os::db::{db::Db, player::Ledger, quests::QuestStore};
//! use neuro_os::libs::quest::Difficulty;
//!
//! let db = Db::new()?;
//! let id = QuestStore::new(&db.conn).insert("Configure Docker on the VPS", Difficulty::Hard)?;
//! let player = Ledger::new(&db.conn).get()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and database location.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// The singleton player record.
pub mod player;

/// Quest insertion, listing, completion and random selection.
pub mod quests;
