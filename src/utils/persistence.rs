//! JSON settings files, kept in ~/.questline/ by default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A directory of small JSON files (settings, preferences).
///
/// Unlike the binary save, these are meant to be hand-editable, so a
/// missing or malformed file falls back to defaults instead of failing.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// The ~/.questline/ store, creating the directory if needed.
    pub fn home() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        let dir = home_dir.join(".questline");
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// A store rooted at `dir`. The directory is created on first save.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Reads `filename`, returning `T::default()` if it is missing or invalid.
    pub fn load_or_default<T: Default + serde::de::DeserializeOwned>(&self, filename: &str) -> T {
        let path = self.path_for(filename);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
                return T::default();
            }
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "invalid JSON, using defaults");
            T::default()
        })
    }

    /// Writes `data` as pretty JSON, replacing the file in one rename.
    pub fn save<T: serde::Serialize>(&self, filename: &str, data: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(filename);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Deletes `filename`. A file that is already gone is not an error.
    pub fn remove(&self, filename: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(filename)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
