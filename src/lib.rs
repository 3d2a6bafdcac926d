//! # Neuro-OS - External executive-function support
//!
//! A command-line quest tracker. Tasks become quests with a difficulty tier,
//! completing them spends a bounded "mana" budget and rewards experience, and
//! a roulette picks one pending quest when deciding what to do next is the
//! hard part.
//!
//! ## Features
//!
//! - **Player Ledger**: Experience, derived level and clamped mana
//! - **Quest Board**: Pending quests, newest first
//! - **Quest Completion**: Fixed rewards per difficulty, blocked on low mana
//! - **Dopamine Roulette**: Uniform random pick among pending quests
//! - **Mana Recovery**: Rest action restoring energy
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neuro_os::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
