//! Archive storage trait and the in-memory implementation

use super::Archive;
use crate::error::{NewsError, Result};
use std::sync::RwLock;

/// Trait for archive storage implementations
pub trait ArchiveStorage: Send + Sync {
    /// Load the stored archive, `None` if nothing was saved yet
    fn load(&self) -> Result<Option<Archive>>;

    /// Replace the stored archive
    fn save(&self, archive: &Archive) -> Result<()>;
}

/// In-memory archive storage
#[derive(Default)]
pub struct MemoryStorage {
    archive: RwLock<Option<Archive>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArchiveStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Archive>> {
        let archive = self
            .archive
            .read()
            .map_err(|e| NewsError::Storage(e.to_string()))?;
        Ok(archive.clone())
    }

    fn save(&self, archive: &Archive) -> Result<()> {
        let mut slot = self
            .archive
            .write()
            .map_err(|e| NewsError::Storage(e.to_string()))?;
        *slot = Some(archive.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::NewNews;
    use chrono::NaiveDate;

    #[test]
    fn test_memory_storage_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_storage_save_load() {
        let storage = MemoryStorage::new();
        let mut archive = Archive::new();
        archive
            .catalog
            .publish(NewNews::new(
                "Заголовок",
                "Текст",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ))
            .unwrap();

        storage.save(&archive).unwrap();
        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.catalog.count(), 1);
    }
}
