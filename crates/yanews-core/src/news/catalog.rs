//! News catalog

use super::model::{NewNews, NewsItem};
use crate::error::{NewsError, Result};
use crate::types::{NewsId, Sequence};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

/// All published news, keyed by id
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewsCatalog {
    news: BTreeMap<NewsId, NewsItem>,
    /// Id allocator; never behind the highest stored id
    sequence: Sequence,
}

impl NewsCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish one news item
    pub fn publish(&mut self, news: NewNews) -> Result<NewsItem> {
        Self::check(&news)?;
        Ok(self.insert(news))
    }

    /// Publish several news items; nothing is stored if any is invalid
    pub fn bulk_create(&mut self, batch: Vec<NewNews>) -> Result<Vec<NewsItem>> {
        for news in &batch {
            Self::check(news)?;
        }
        let created: Vec<NewsItem> = batch.into_iter().map(|n| self.insert(n)).collect();
        debug!("Bulk created {} news items", created.len());
        Ok(created)
    }

    pub fn get(&self, id: NewsId) -> Result<&NewsItem> {
        self.news.get(&id).ok_or(NewsError::NewsNotFound(id))
    }

    /// Newest first, at most `limit` items.
    ///
    /// Items sharing a date come most-recently-inserted first.
    pub fn list_recent(&self, limit: usize) -> Vec<NewsItem> {
        let mut items: Vec<&NewsItem> = self.news.values().collect();
        items.sort_by_key(|n| Reverse((n.date, n.id)));
        items.into_iter().take(limit).cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.news.len()
    }

    pub fn is_empty(&self) -> bool {
        self.news.is_empty()
    }

    fn check(news: &NewNews) -> Result<()> {
        if news.title.trim().is_empty() {
            return Err(NewsError::Validation(
                "News title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn insert(&mut self, news: NewNews) -> NewsItem {
        let item = NewsItem {
            id: NewsId(self.sequence.next_value()),
            title: news.title,
            text: news.text,
            date: news.date,
        };
        self.news.insert(item.id, item.clone());
        item
    }
}

impl<'de> Deserialize<'de> for NewsCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct NewsCatalogHelper {
            news: BTreeMap<NewsId, NewsItem>,
            #[serde(default)]
            sequence: Sequence,
        }

        let helper = NewsCatalogHelper::deserialize(deserializer)?;
        let highest = helper.news.keys().next_back().map_or(0, |id| id.0);
        if helper.sequence.last() < highest {
            return Err(serde::de::Error::custom(format!(
                "news sequence {} is behind highest id {}",
                helper.sequence.last(),
                highest
            )));
        }

        Ok(Self {
            news: helper.news,
            sequence: helper.sequence,
        })
    }
}
