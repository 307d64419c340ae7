use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::slot::SlotStore`] handles the "what" (encoding, seeding).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if the slot has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Where the slot lives, for display.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn slot_location(&self, key: &str) -> PathBuf;
}

/// Shared handle, so a caller can keep inspecting a backend owned by a store.
impl<B: StorageBackend> StorageBackend for std::rc::Rc<B> {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_slot(key, value)
    }

    fn slot_location(&self, key: &str) -> PathBuf {
        (**self).slot_location(key)
    }
}
