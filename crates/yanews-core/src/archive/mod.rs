//! Archive module
//!
//! The archive is everything the service persists: the news catalog and
//! the comment store. It is saved and loaded as a single snapshot.
//!
//! # Example
//!
//! ```ignore
//! use yanews_core::archive::{Archive, ArchiveStorage, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! storage.save(&Archive::new())?;
//! let loaded = storage.load()?;
//! ```

pub mod migration;
mod persistence;

pub use migration::{ArchiveFile, ArchiveMigrator, CURRENT_SCHEMA_VERSION};
pub use persistence::{ArchiveStorage, MemoryStorage};

use crate::comment::CommentStore;
use crate::news::NewsCatalog;
use serde::{Deserialize, Serialize};

/// Persisted state: news and their comments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Archive {
    #[serde(default)]
    pub catalog: NewsCatalog,
    #[serde(default)]
    pub comments: CommentStore,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }
}
