use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::GameState;

use super::{decode_state, encode_state};

/// Fixed key the whole progression blob lives under.
pub const STORAGE_KEY: &str = "dirt-clicker-storage";

/// Minimal persistent key-value store holding string blobs.
pub trait SaveStorage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SaveStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed reading save file: {}", path.display()))
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed creating save directory: {}", self.dir.display()))?;

        // Write beside the target and rename so a crash never leaves half a blob.
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)
            .with_context(|| format!("failed writing save file: {}", staging.display()))?;
        fs::rename(&staging, &path)
            .with_context(|| format!("failed replacing save file: {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Err(err) if err.kind() != ErrorKind::NotFound => {
                Err(err).with_context(|| format!("failed removing save file: {}", path.display()))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl SaveStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Restores the saved game, falling back to a fresh one when the blob is missing,
/// unreadable or from an incompatible version.
pub fn load_or_initial(storage: &impl SaveStorage) -> GameState {
    let text = match storage.read(STORAGE_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!("no saved game found, starting fresh");
            return GameState::new();
        }
        Err(err) => {
            warn!("could not read saved game, starting fresh: {err:#}");
            return GameState::new();
        }
    };

    match decode_state(&text) {
        Ok(state) => state,
        Err(err) => {
            warn!("discarding saved game: {err:#}");
            GameState::new()
        }
    }
}

pub fn persist(storage: &mut impl SaveStorage, state: &GameState) -> Result<()> {
    let json = encode_state(state)?;
    storage.write(STORAGE_KEY, &json)?;
    info!(total_clicks = state.total_clicks(), "game saved");
    Ok(())
}

/// Drops the stored blob so the next boot starts fresh.
pub fn discard_saved_game(storage: &mut impl SaveStorage) -> Result<()> {
    storage.remove(STORAGE_KEY)?;
    info!("saved game discarded");
    Ok(())
}
