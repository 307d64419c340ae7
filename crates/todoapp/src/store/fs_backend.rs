use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores each slot as `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_filename(key: &str) -> String {
        format!("{}.json", key)
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_location(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(TodoError::Io)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| TodoError::Corrupt(format!("{}: {}", path.display(), e)))?;
        Ok(Some(content))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let target = self.slot_location(key);
        let unavailable =
            |e: std::io::Error| TodoError::Storage(format!("{}: {}", target.display(), e));
        self.ensure_dir().map_err(unavailable)?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(unavailable)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(unavailable(e));
        }

        debug!("wrote {} bytes to {}", value.len(), target.display());
        Ok(())
    }

    fn slot_location(&self, key: &str) -> PathBuf {
        self.root.join(Self::slot_filename(key))
    }
}
