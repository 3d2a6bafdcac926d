//! Configuration management for Neuro-OS.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! per-OS data directory (see [`DataStorage`]). A missing file means
//! defaults everywhere, so the game runs without any setup.
//!
//! ## Modules
//!
//! - **Database**: Override the location of the SQLite file
//! - **Pacing**: Delays the console uses for the recovery and roulette
//!   actions, so the player gets a moment to breathe before the result
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neuro_os::libs::config::Config;
//!
//! let config = Config::read()?;
//! let pacing = config.pacing.clone().unwrap_or_default();
//! println!("Roulette delay: {}ms", pacing.roulette_delay_ms);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    /// Path of the SQLite file. The data directory is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Console pacing for the slower, more deliberate actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PacingConfig {
    /// Pause before mana recovery is applied, in milliseconds.
    pub recovery_delay_ms: u64,

    /// Suspense before the roulette reveals its pick, in milliseconds.
    pub roulette_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            recovery_delay_ms: 1500,
            roulette_delay_ms: 2000,
        }
    }
}

impl PacingConfig {
    /// No delays at all.
    pub fn instant() -> Self {
        PacingConfig {
            recovery_delay_ms: 0,
            roulette_delay_ms: 0,
        }
    }

    pub fn recovery_delay(&self) -> Duration {
        Duration::from_millis(self.recovery_delay_ms)
    }

    pub fn roulette_delay(&self) -> Duration {
        Duration::from_millis(self.roulette_delay_ms)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pacing: Option<PacingConfig>,
}

impl Config {
    /// Reads the configuration from the data directory, defaults when absent.
    pub fn read() -> Result<Config> {
        Self::read_from(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        match serde_json::from_str(&config_str) {
            Ok(config) => Ok(config),
            Err(e) => msg_bail_anyhow!(Message::ConfigInvalid(path.display().to_string(), e.to_string())),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_file =
            File::create(path).map_err(|e| msg_error_anyhow!(Message::ConfigWriteFailed(path.display().to_string(), e.to_string())))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(path)?;
        Ok(true)
    }

    /// Pacing settings, defaults when the module is not configured.
    pub fn pacing(&self) -> PacingConfig {
        self.pacing.clone().unwrap_or_default()
    }

    pub fn modules() -> Vec<ConfigModule> {
        vec![
            ConfigModule {
                key: "database".to_string(),
                name: "Database".to_string(),
            },
            ConfigModule {
                key: "pacing".to_string(),
                name: "Pacing".to_string(),
            },
        ]
    }

    /// Interactive setup wizard, seeded with the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let modules = Self::modules();

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "database" => {
                    let default = config.database.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDatabase);
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default.path.unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.database = Some(DatabaseConfig {
                        path: if path.trim().is_empty() { None } else { Some(path.trim().to_string()) },
                    });
                }
                "pacing" => {
                    let default = config.pacing();
                    msg_print!(Message::ConfigModulePacing);
                    config.pacing = Some(PacingConfig {
                        recovery_delay_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRecoveryDelay.to_string())
                            .default(default.recovery_delay_ms)
                            .interact_text()?,
                        roulette_delay_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRouletteDelay.to_string())
                            .default(default.roulette_delay_ms)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
