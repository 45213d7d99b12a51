//! File system storage for the archive

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use yanews_core::archive::{
    Archive, ArchiveFile, ArchiveMigrator, ArchiveStorage, CURRENT_SCHEMA_VERSION,
};
use yanews_core::error::{NewsError, Result};

const ARCHIVE_FILE: &str = "archive.json";

/// File system based archive storage
pub struct FileSystemStorage {
    /// Base directory for the archive
    base_dir: PathBuf,
}

impl FileSystemStorage {
    /// Create a new file system storage
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let storage = Self {
            base_dir: base_dir.into(),
        };

        storage.ensure_dirs()?;
        Ok(storage)
    }

    /// Platform data directory, falling back to ~/.yanews
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "yanews", "yanews")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".yanews")
            })
    }

    /// Ensure required directories exist
    fn ensure_dirs(&self) -> Result<()> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).map_err(|e| {
                NewsError::Io(e).with_context(format!(
                    "Failed to create data directory {}",
                    self.base_dir.display()
                ))
            })?;
            debug!("Created data directory: {:?}", self.base_dir);
        }
        Ok(())
    }

    /// Path of the archive file
    pub fn archive_path(&self) -> PathBuf {
        self.base_dir.join(ARCHIVE_FILE)
    }

    /// Temporary path for atomic writes
    fn temp_path(&self) -> PathBuf {
        self.base_dir.join(format!(".{}.tmp", ARCHIVE_FILE))
    }

    /// Write archive atomically (write to temp, then rename)
    fn atomic_write(&self, archive: &Archive) -> Result<()> {
        let temp_path = self.temp_path();
        let final_path = self.archive_path();

        let file = ArchiveFile::new(archive.clone());

        let temp_file = fs::File::create(&temp_path)
            .map_err(|e| NewsError::Io(e).with_context("Failed to create temp file"))?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, &file)?;
        writer.flush()?;
        drop(writer);

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            NewsError::Io(e).with_context("Failed to rename temp file")
        })?;

        debug!("Saved archive to {:?}", final_path);
        Ok(())
    }

    /// Read and parse the archive file
    fn read_archive(&self, path: &Path) -> Result<Archive> {
        let file = fs::File::open(path)?;
        let reader = BufReader::new(file);
        let archive_file: ArchiveFile = serde_json::from_reader(reader)
            .map_err(|e| NewsError::Serde(e).with_context(format!("Reading {}", path.display())))?;

        let migrated = if ArchiveMigrator::needs_migration(&archive_file) {
            info!(
                "Migrating archive from version {} to {}",
                archive_file.schema_version, CURRENT_SCHEMA_VERSION
            );
            ArchiveMigrator::migrate(archive_file)?
        } else {
            archive_file
        };

        Ok(migrated.into_archive())
    }

    /// Get base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl ArchiveStorage for FileSystemStorage {
    fn load(&self) -> Result<Option<Archive>> {
        let path = self.archive_path();
        if !path.exists() {
            return Ok(None);
        }
        self.read_archive(&path).map(Some)
    }

    fn save(&self, archive: &Archive) -> Result<()> {
        self.atomic_write(archive)
    }
}
