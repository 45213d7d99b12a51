//! Comment store with CRUD operations

use super::index::CommentIndex;
use super::model::Comment;
use crate::error::{NewsError, Result};
use crate::news::NewsCatalog;
use crate::types::{CommentId, Identity, NewsId, Sequence};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// All comments, keyed by id
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentStore {
    /// All comments by ID
    comments: BTreeMap<CommentId, Comment>,
    /// Id allocator; survives deletions so ids are never reused
    sequence: Sequence,
    #[serde(skip)]
    index: CommentIndex,
}

impl CommentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment to a news item.
    ///
    /// `now` becomes the creation time; the news item must exist in `catalog`.
    pub fn append(
        &mut self,
        catalog: &NewsCatalog,
        author: Identity,
        news: NewsId,
        text: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Comment> {
        catalog.get(news)?;

        let comment = Comment {
            id: CommentId(self.sequence.next_value()),
            news,
            author,
            text: text.into(),
            created: now,
        };

        self.index.add(&comment);
        self.comments.insert(comment.id, comment.clone());
        debug!("Appended comment {} to news {}", comment.id, news);
        Ok(comment)
    }

    /// Get a comment by ID
    pub fn get(&self, id: CommentId) -> Result<&Comment> {
        self.comments.get(&id).ok_or(NewsError::CommentNotFound(id))
    }

    /// Replace comment text; author, news and creation time stay
    pub fn update(&mut self, id: CommentId, text: impl Into<String>) -> Result<Comment> {
        let comment = self
            .comments
            .get_mut(&id)
            .ok_or(NewsError::CommentNotFound(id))?;

        comment.text = text.into();
        debug!("Updated comment {}", id);
        Ok(comment.clone())
    }

    /// Delete a comment
    pub fn delete(&mut self, id: CommentId) -> Result<Comment> {
        let comment = self
            .comments
            .remove(&id)
            .ok_or(NewsError::CommentNotFound(id))?;

        self.index.remove(&comment);
        debug!("Deleted comment {}", id);
        Ok(comment)
    }

    /// Comments of a news item in chronological order, sorted on every call
    pub fn list_by_news(&self, news: NewsId) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .index
            .get_by_news(news)
            .iter()
            .filter_map(|id| self.comments.get(id))
            .cloned()
            .collect();
        comments.sort_by(Comment::chronological);
        comments
    }

    /// Comments written by an author, in chronological order
    pub fn by_author(&self, author: &Identity) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .index
            .get_by_author(author)
            .iter()
            .filter_map(|id| self.comments.get(id))
            .collect();
        comments.sort_by(|a, b| Comment::chronological(a, b));
        comments
    }

    /// Get total comment count
    pub fn count(&self) -> usize {
        self.comments.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Rebuild index (after deserialization)
    pub fn rebuild_index(&mut self) {
        self.index.rebuild(self.comments.values());
    }
}

// Custom deserialization to rebuild index
impl<'de> Deserialize<'de> for CommentStore {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CommentStoreHelper {
            comments: BTreeMap<CommentId, Comment>,
            #[serde(default)]
            sequence: Sequence,
        }

        let helper = CommentStoreHelper::deserialize(deserializer)?;
        let highest = helper.comments.keys().next_back().map_or(0, |id| id.0);
        if helper.sequence.last() < highest {
            return Err(serde::de::Error::custom(format!(
                "comment sequence {} is behind highest id {}",
                helper.sequence.last(),
                highest
            )));
        }

        let mut store = Self {
            comments: helper.comments,
            sequence: helper.sequence,
            index: CommentIndex::new(),
        };
        store.rebuild_index();
        Ok(store)
    }
}
