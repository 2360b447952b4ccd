//! FileMedium - one JSON file per key under a data directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::Medium;
use crate::error::MediumError;

const EXTENSION: &str = "json";

/// File-backed medium. Each key is stored as `<data_dir>/<key>.json`.
///
/// Writes go through a temporary file that is synced and renamed over the
/// target, so a crash never leaves a half-written collection behind.
#[derive(Debug, Clone)]
pub struct FileMedium {
    data_dir: PathBuf,
}

impl FileMedium {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, MediumError> {
        validate_key(key)?;
        Ok(self.data_dir.join(format!("{}.{}", key, EXTENSION)))
    }
}

fn validate_key(key: &str) -> Result<(), MediumError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(MediumError::InvalidKey(key.to_string()))
    }
}

/// Write `content` to `path` atomically (write -> sync -> rename).
///
/// Every call gets its own uniquely named temp file in the target directory,
/// so concurrent writers to one key never share a temp path.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl Medium for FileMedium {
    fn open(&self) -> Result<(), MediumError> {
        fs::create_dir_all(&self.data_dir)?;
        info!(dir = %self.data_dir.display(), "file medium opened");
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError> {
        let path = self.path_for(key)?;
        atomic_write(&path, value.as_bytes())?;
        debug!(key, bytes = value.len(), "file medium write");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool, MediumError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, MediumError> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        Ok(keys)
    }
}
