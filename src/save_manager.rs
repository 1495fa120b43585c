use crate::core::constants::{SAVE_FILE_NAME, SAVE_VERSION_MAGIC};
use crate::core::game_state::GameState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const MAGIC_LEN: usize = 8;
const LENGTH_LEN: usize = 4;
const CHECKSUM_LEN: usize = 32;

/// Manages saving and loading game state with checksummed binary format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager instance
    ///
    /// Sets up the save directory at the appropriate location for the platform
    /// using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "questline").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine data directory",
            )
        })?;

        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;

        Ok(Self {
            save_path: data_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Uses an explicit file path instead of the platform data directory.
    pub fn at_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Saves the game state to disk with checksum verification
    ///
    /// The file is written next to the target and renamed over it, so a
    /// crash mid-write leaves the previous save intact.
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let bytes = encode(state)?;

        let tmp_path = self.save_path.with_extension("tmp");
        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.save_path)?;

        debug!(path = %self.save_path.display(), bytes = bytes.len(), "game saved");
        Ok(())
    }

    /// Loads the game state from disk with checksum verification
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The version magic is incorrect
    /// - The checksum verification fails
    /// - The data cannot be deserialized
    pub fn load(&self) -> io::Result<GameState> {
        let bytes = fs::read(&self.save_path)?;
        decode(&bytes).inspect_err(|e| {
            warn!(path = %self.save_path.display(), error = %e, "save file rejected");
        })
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn delete(&self) -> io::Result<()> {
        match fs::remove_file(&self.save_path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Serializes a state into the save format.
///
/// File format:
/// - Version magic (8 bytes)
/// - Data length (4 bytes)
/// - Serialized game state (variable length)
/// - SHA256 checksum over everything before it (32 bytes)
pub fn encode(state: &GameState) -> io::Result<Vec<u8>> {
    let data =
        bincode::serialize(state).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let data_len = u32::try_from(data.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Save data too large"))?;

    let mut bytes = Vec::with_capacity(MAGIC_LEN + LENGTH_LEN + data.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(&data);

    let checksum = Sha256::digest(&bytes);
    bytes.extend_from_slice(&checksum);
    Ok(bytes)
}

/// Parses and verifies bytes produced by `encode`.
pub fn decode(bytes: &[u8]) -> io::Result<GameState> {
    let invalid = |msg: String| io::Error::new(io::ErrorKind::InvalidData, msg);

    if bytes.len() < MAGIC_LEN + LENGTH_LEN + CHECKSUM_LEN {
        return Err(invalid(format!("Save file truncated: {} bytes", bytes.len())));
    }

    let (magic_bytes, rest) = bytes.split_at(MAGIC_LEN);
    let mut magic = [0u8; MAGIC_LEN];
    magic.copy_from_slice(magic_bytes);
    let version = u64::from_le_bytes(magic);
    if version != SAVE_VERSION_MAGIC {
        return Err(invalid(format!(
            "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
            SAVE_VERSION_MAGIC, version
        )));
    }

    let (length_bytes, rest) = rest.split_at(LENGTH_LEN);
    let mut length = [0u8; LENGTH_LEN];
    length.copy_from_slice(length_bytes);
    let data_len = u32::from_le_bytes(length) as usize;

    if rest.len() != data_len + CHECKSUM_LEN {
        return Err(invalid(format!(
            "Save length mismatch: header says {} bytes, found {}",
            data_len,
            rest.len().saturating_sub(CHECKSUM_LEN)
        )));
    }

    let (data, stored_checksum) = rest.split_at(data_len);
    let computed_checksum = Sha256::digest(&bytes[..MAGIC_LEN + LENGTH_LEN + data_len]);
    if stored_checksum != computed_checksum.as_slice() {
        return Err(invalid("Checksum verification failed".to_string()));
    }

    bincode::deserialize(data).map_err(|e| invalid(e.to_string()))
}
