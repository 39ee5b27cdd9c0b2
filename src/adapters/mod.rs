use crate::domain::model::LeaderboardEntry;
use crate::domain::ports::{AssetSource, ScoreStore};
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const HALL_OF_FAME_FILE: &str = "hall_of_fame.json";

/// Hall of Fame persistence: one JSON file holding the full entry list,
/// rewritten on every append. A missing or corrupt file reads as empty;
/// the problem is logged, never surfaced to the player.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(HALL_OF_FAME_FILE),
        }
    }

    fn load(&self) -> Vec<LeaderboardEntry> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Hall of Fame file is corrupt, treating as empty: {}", e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read the Hall of Fame file: {}", e);
                Vec::new()
            }
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn read_all(&self) -> Result<Vec<LeaderboardEntry>> {
        Ok(self.load())
    }

    fn append(&mut self, entry: LeaderboardEntry) -> Result<()> {
        let mut entries = self.load();
        entries.push(entry);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Keeps scores for the current process only. Used by tests and by
/// `--no-persist` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<LeaderboardEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }
}

impl ScoreStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<LeaderboardEntry>> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, entry: LeaderboardEntry) -> Result<()> {
        self.entries.push(entry);
        Ok(())
    }
}

/// Portrait lookup against a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalAssets {
    base_path: PathBuf,
}

impl LocalAssets {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }
}

impl AssetSource for LocalAssets {
    fn exists(&self, image_ref: &str) -> bool {
        // image_ref carries a portraits/ prefix; only the file name is
        // looked up under the configured directory.
        let relative = Path::new(image_ref)
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(image_ref));
        self.base_path.join(relative).is_file()
    }
}

/// Treats every portrait as present. Used when no portraits directory is
/// installed, so the board stays fully selectable.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPresent;

impl AssetSource for AlwaysPresent {
    fn exists(&self, _image_ref: &str) -> bool {
        true
    }
}
