//! Comment data models

use crate::types::{CommentId, Identity, NewsId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A reader comment attached to a news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier, allocated in insertion order
    pub id: CommentId,
    /// News item the comment belongs to (never changes)
    pub news: NewsId,
    /// Author of the comment (never changes)
    pub author: Identity,
    /// Comment text
    pub text: String,
    /// Server-assigned creation time
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Chronological display order: creation time, then insertion order
    pub fn chronological(a: &Comment, b: &Comment) -> Ordering {
        a.created.cmp(&b.created).then(a.id.cmp(&b.id))
    }

    /// Whether the identity wrote this comment
    pub fn is_authored_by(&self, identity: &Identity) -> bool {
        &self.author == identity
    }
}

/// Comment form shown on the news detail page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    /// Text to prefill (the rejected text when re-displaying)
    pub text: String,
    /// Rejection reason, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommentForm {
    /// An empty form
    pub fn empty() -> Self {
        Self::default()
    }

    /// A form prefilled from an existing comment
    pub fn for_comment(comment: &Comment) -> Self {
        Self {
            text: comment.text.clone(),
            error: None,
        }
    }
}
