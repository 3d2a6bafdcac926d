//! Core library modules for Neuro-OS.
//!
//! ## Features
//!
//! - **Game Logic**: Player arithmetic, quest model, reward table
//! - **Game Service**: The single entry point used by every command
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **User Interface**: Console tables for the HUD, board and rewards
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neuro_os::libs::game::Game;
//! use neuro_os::libs::quest::Difficulty;
//!
//! let game = Game::new()?;
//! game.add_quest("Reply to the landlord", Difficulty::Easy)?;
//! for quest in game.list_pending()? {
//!     println!("{} {}", quest.difficulty.marker(), quest.description);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod game;
pub mod messages;
pub mod player;
pub mod quest;
pub mod view;
