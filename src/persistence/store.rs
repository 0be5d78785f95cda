//! Persistence domain: JSON-backed key/value save store.

use bevy::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SAVE_PATH: &str = "galley_save.json";

/// Well-known save keys. The store itself is schema-opaque; these are the
/// only keys this crate reads or writes.
pub mod keys {
    pub const CURRENT_ROOM: &str = "current_room";
    pub const ROOMS_VISITED: &str = "rooms_visited";
    pub const PLAYER_MAX_HP: &str = "player_max_hp";
}

#[derive(Debug)]
pub enum SaveError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "save file io error: {err}"),
            Self::Parse(err) => write!(f, "save file is not valid json: {err}"),
        }
    }
}

impl From<io::Error> for SaveError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// String key/value progress store persisted as a flat JSON object.
/// Callers parse values themselves; the store never interprets them.
#[derive(Resource, Debug)]
pub struct SaveStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl SaveStore {
    /// Open the store at `path`. A missing file is a fresh run; an
    /// unreadable or corrupt file logs a warning and starts empty rather
    /// than failing the boot.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read_file(&path) {
            Ok(values) => values,
            Err(SaveError::Io(err)) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!("[SAVE] Could not read save file, starting fresh: {err}");
                HashMap::new()
            }
        };
        Self { path, values }
    }

    fn read_file(path: &Path) -> Result<HashMap<String, String>, SaveError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Fetch and parse a value; absent or unparseable yields `None`.
    pub fn get_parsed<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|value| value.parse().ok())
    }

    pub fn set(&mut self, key: &str, value: impl ToString) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn write(&self) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
