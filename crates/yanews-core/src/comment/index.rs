//! Comment indexing for fast lookup

use super::model::Comment;
use crate::types::{CommentId, Identity, NewsId};
use std::collections::HashMap;

/// Secondary indexes over comments
#[derive(Debug, Clone, Default)]
pub struct CommentIndex {
    /// Index by news item
    by_news: HashMap<NewsId, Vec<CommentId>>,
    /// Index by author
    by_author: HashMap<Identity, Vec<CommentId>>,
}

impl CommentIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a comment to the index
    pub fn add(&mut self, comment: &Comment) {
        self.by_news.entry(comment.news).or_default().push(comment.id);
        self.by_author
            .entry(comment.author.clone())
            .or_default()
            .push(comment.id);
    }

    /// Remove a comment from the index
    pub fn remove(&mut self, comment: &Comment) {
        if let Some(ids) = self.by_news.get_mut(&comment.news) {
            ids.retain(|id| id != &comment.id);
            if ids.is_empty() {
                self.by_news.remove(&comment.news);
            }
        }

        if let Some(ids) = self.by_author.get_mut(&comment.author) {
            ids.retain(|id| id != &comment.id);
            if ids.is_empty() {
                self.by_author.remove(&comment.author);
            }
        }
    }

    /// Get comment ids for a news item
    pub fn get_by_news(&self, news: NewsId) -> &[CommentId] {
        self.by_news.get(&news).map(Vec::as_slice).unwrap_or_default()
    }

    /// Get comment ids by author
    pub fn get_by_author(&self, author: &Identity) -> &[CommentId] {
        self.by_author
            .get(author)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Clear the entire index
    pub fn clear(&mut self) {
        self.by_news.clear();
        self.by_author.clear();
    }

    /// Rebuild index from a collection of comments
    pub fn rebuild<'a>(&mut self, comments: impl IntoIterator<Item = &'a Comment>) {
        self.clear();
        for comment in comments {
            self.add(comment);
        }
    }
}
