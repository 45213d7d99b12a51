//! Read-side views: home listing and news detail

use super::Newsroom;
use crate::comment::{Comment, CommentForm};
use crate::error::Result;
use crate::moderation::Rejection;
use crate::news::NewsItem;
use crate::types::{CommentId, Identity, NewsId};
use serde::Serialize;

/// A news item with its comments, as shown on the detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsDetail {
    pub news: NewsItem,
    /// Comments in chronological order
    pub comments: Vec<Comment>,
    /// Submission form; absent for anonymous readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CommentForm>,
}

impl NewsDetail {
    /// Show a rejected submission back to its author
    pub fn with_rejection(mut self, rejection: Rejection) -> Self {
        self.form = Some(CommentForm {
            text: rejection.text,
            error: Some(rejection.reason),
        });
        self
    }
}

impl Newsroom {
    /// Home page: the most recent news, at most `news_per_page`
    pub fn home(&self) -> Result<Vec<NewsItem>> {
        let limit = self.config.news.news_per_page;
        self.snapshot(|archive| archive.catalog.list_recent(limit))
    }

    /// Detail page of one news item
    pub fn detail(&self, requester: Option<&Identity>, id: NewsId) -> Result<NewsDetail> {
        self.snapshot(|archive| {
            let news = archive.catalog.get(id)?.clone();
            Ok(NewsDetail {
                news,
                comments: archive.comments.list_by_news(id),
                form: requester.map(|_| CommentForm::empty()),
            })
        })?
    }

    /// Look up a single comment
    pub fn comment(&self, id: CommentId) -> Result<Comment> {
        self.snapshot(|archive| archive.comments.get(id).cloned())?
    }

    /// Comments written by one reader
    pub fn comments_by(&self, author: &Identity) -> Result<Vec<Comment>> {
        self.snapshot(|archive| {
            archive
                .comments
                .by_author(author)
                .into_iter()
                .cloned()
                .collect()
        })
    }
}
