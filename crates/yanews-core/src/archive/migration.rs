//! Archive file format and schema migration

use super::Archive;
use crate::error::{NewsError, Result};
use serde::{Deserialize, Serialize};

/// Current schema version
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

const CURRENT_MAJOR: u32 = 1;

/// Archive file format with schema version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveFile {
    /// Schema version for migration
    pub schema_version: String,
    /// The archive data
    pub archive: Archive,
}

impl ArchiveFile {
    /// Wrap an archive with the current schema version
    pub fn new(archive: Archive) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            archive,
        }
    }

    pub fn into_archive(self) -> Archive {
        self.archive
    }

    /// Parse schema version as (major, minor)
    pub fn parse_version(&self) -> Option<(u32, u32)> {
        let (major, minor) = self.schema_version.split_once('.')?;
        Some((major.parse().ok()?, minor.parse().ok()?))
    }
}

/// Archive schema migrator
pub struct ArchiveMigrator;

impl ArchiveMigrator {
    /// Bring an archive file to the current schema version
    pub fn migrate(mut file: ArchiveFile) -> Result<ArchiveFile> {
        let (major, _) = file.parse_version().ok_or_else(|| {
            NewsError::UnsupportedSchemaVersion(format!(
                "invalid version format: {}",
                file.schema_version
            ))
        })?;

        if major != CURRENT_MAJOR {
            return Err(NewsError::UnsupportedSchemaVersion(format!(
                "{} (expected {}.x)",
                file.schema_version, CURRENT_MAJOR
            )));
        }

        // 1.x minors only add defaulted fields
        file.schema_version = CURRENT_SCHEMA_VERSION.to_string();
        Ok(file)
    }

    pub fn needs_migration(file: &ArchiveFile) -> bool {
        file.schema_version != CURRENT_SCHEMA_VERSION
    }
}
