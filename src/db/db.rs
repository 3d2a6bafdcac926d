use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "neuro_os.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database and brings its schema up to date.
    pub fn new() -> Result<Db> {
        Self::open(Self::resolve_path()?)
    }

    /// Opens the database at `path`, creating it if needed, and runs migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Raw connection to the configured database, without touching the schema.
    pub fn new_without_migrations() -> Result<Connection> {
        Ok(Connection::open(Self::resolve_path()?)?)
    }

    /// `database.path` from the config when set, the data directory otherwise.
    pub fn resolve_path() -> Result<PathBuf> {
        if let Some(path) = Config::read()?.database.and_then(|database| database.path) {
            return Ok(PathBuf::from(path));
        }

        DataStorage::new().get_path(DB_FILE_NAME)
    }
}
