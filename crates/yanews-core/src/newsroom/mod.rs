//! Newsroom: the service facade
//!
//! The newsroom owns the archive and runs every request against it:
//! listing news, showing a news item with its comments, submitting,
//! editing and deleting comments.
//!
//! # Concurrency
//!
//! The archive sits behind a single `RwLock`. A mutation resolves,
//! authorizes, mutates and persists while holding the write lock, so
//! concurrent edits and deletes of one comment behave as if run one
//! after another. Reads clone what they need under the read lock.
//! Changes become visible only after the storage accepted them.
//!
//! A mutation works on a clone of the whole archive, so each write costs
//! O(news + comments).
//!
//! # Example
//!
//! ```ignore
//! use yanews_core::{Config, Identity, Newsroom};
//!
//! let newsroom = Newsroom::in_memory(Config::default())?;
//! let reader = Identity::new("reader")?;
//! let submitted = newsroom.submit(Some(&reader), news_id, "Хорошая новость")?;
//! assert_eq!(submitted.redirect.location(), "/news/1/#comments");
//! ```

mod clock;
mod moderate;
mod submit;
mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use submit::Submitted;
pub use views::NewsDetail;

use crate::archive::{Archive, ArchiveStorage, MemoryStorage};
use crate::config::Config;
use crate::error::{NewsError, Result};
use crate::moderation::{AccessPolicy, CommentValidator, ContentFilter};
use crate::news::{NewNews, NewsItem};
use crate::routes::Routes;
use crate::types::Identity;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Moderation and authorization core of the news site
pub struct Newsroom {
    archive: RwLock<Archive>,
    storage: Arc<dyn ArchiveStorage>,
    clock: Arc<dyn Clock>,
    config: Config,
    routes: Routes,
    validator: CommentValidator,
    policy: AccessPolicy,
}

impl Newsroom {
    /// Open a newsroom over the given storage, loading its archive if any
    pub fn open(config: Config, storage: Arc<dyn ArchiveStorage>) -> Result<Self> {
        config.validate()?;
        let archive = match storage.load()? {
            Some(archive) => {
                info!(
                    "Loaded archive with {} news and {} comments",
                    archive.catalog.count(),
                    archive.comments.count()
                );
                archive
            }
            None => {
                debug!("Starting with an empty archive");
                Archive::new()
            }
        };

        Ok(Self {
            archive: RwLock::new(archive),
            storage,
            clock: Arc::new(SystemClock),
            routes: Routes::new(config.routes.clone()),
            validator: CommentValidator::new(
                config.news.max_comment_length,
                ContentFilter::new(&config.censor),
            ),
            policy: AccessPolicy::new(config.news.denial_policy),
            config,
        })
    }

    /// Newsroom backed by a fresh in-memory storage
    pub fn in_memory(config: Config) -> Result<Self> {
        Self::open(config, Arc::new(MemoryStorage::new()))
    }

    /// Replace the clock used to stamp new comments
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Publish one news item
    pub fn publish(&self, news: NewNews) -> Result<NewsItem> {
        let item = self.commit(|archive| archive.catalog.publish(news))?;
        info!("Published news {} dated {}", item.id, item.date);
        Ok(item)
    }

    /// Publish several news items at once
    pub fn bulk_create(&self, batch: Vec<NewNews>) -> Result<Vec<NewsItem>> {
        let items = self.commit(|archive| archive.catalog.bulk_create(batch))?;
        info!("Published {} news items", items.len());
        Ok(items)
    }

    /// Anonymous requesters get a login redirect returning to `next`
    fn require_identity<'a>(
        &self,
        requester: Option<&'a Identity>,
        next: impl FnOnce() -> String,
    ) -> Result<&'a Identity> {
        requester.ok_or_else(|| NewsError::Unauthenticated {
            login: self.routes.login_redirect(&next()),
        })
    }

    /// Run a read-only view against the current archive
    fn snapshot<T>(&self, view: impl FnOnce(&Archive) -> T) -> Result<T> {
        let archive = self
            .archive
            .read()
            .map_err(|e| NewsError::Storage(format!("archive lock poisoned: {}", e)))?;
        Ok(view(&archive))
    }

    /// Apply a mutation under the write lock and persist it.
    ///
    /// The mutation runs on a copy; the copy replaces the live archive only
    /// once `op` succeeded and the storage saved it.
    fn commit<T>(&self, op: impl FnOnce(&mut Archive) -> Result<T>) -> Result<T> {
        let mut archive = self
            .archive
            .write()
            .map_err(|e| NewsError::Storage(format!("archive lock poisoned: {}", e)))?;

        let mut next = archive.clone();
        let out = op(&mut next)?;
        self.storage.save(&next)?;
        *archive = next;
        Ok(out)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::types::NewsId;

    #[test]
    fn test_open_loads_existing_archive() {
        let storage = Arc::new(MemoryStorage::new());
        let first = Newsroom::open(Config::default(), storage.clone()).unwrap();
        first
            .publish(NewNews::new("Заголовок", "Текст", today()))
            .unwrap();

        let reopened = Newsroom::open(Config::default(), storage).unwrap();
        assert_eq!(reopened.home().unwrap().len(), 1);
        let next = reopened
            .publish(NewNews::new("Второй", "Текст", today()))
            .unwrap();
        assert_eq!(next.id, NewsId(2));
    }

    #[test]
    fn test_open_rejects_invalid_config() {
        let mut config = Config::default();
        config.news.news_per_page = 0;
        assert!(Newsroom::in_memory(config).is_err());
    }

    #[test]
    fn test_failed_mutation_leaves_archive_untouched() {
        let (newsroom, _) = newsroom(Config::default());
        let before = newsroom.home().unwrap();

        let batch = vec![
            NewNews::new("ok", "", today()),
            NewNews::new(" ", "", today()),
        ];
        assert!(newsroom.bulk_create(batch).is_err());
        assert_eq!(newsroom.home().unwrap(), before);
    }

    #[test]
    fn test_require_identity() {
        let (newsroom, _) = newsroom(Config::default());
        let err = newsroom
            .require_identity(None, || "/news/1/".to_string())
            .unwrap_err();
        assert_eq!(err.location(), Some("/auth/login/?next=/news/1/"));

        let reader = author();
        assert_eq!(
            newsroom.require_identity(Some(&reader), String::new).unwrap(),
            &reader
        );
    }
}
