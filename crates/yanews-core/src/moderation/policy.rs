//! Ownership-based access policy

use crate::comment::Comment;
use crate::error::{NewsError, Result};
use crate::types::Identity;
use serde::{Deserialize, Serialize};

/// How a denied non-owner is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenialPolicy {
    /// Answer `Forbidden`, disclosing that the comment exists
    Forbid,
    /// Answer `CommentNotFound`, as if the comment did not exist
    #[default]
    Conceal,
}

/// Decides who may edit or delete a comment
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy {
    denial: DenialPolicy,
}

impl AccessPolicy {
    pub fn new(denial: DenialPolicy) -> Self {
        Self { denial }
    }

    /// True iff the requester is present and is the comment's author
    pub fn can_modify(requester: Option<&Identity>, comment: &Comment) -> bool {
        requester.is_some_and(|identity| comment.is_authored_by(identity))
    }

    /// Check an authenticated requester, mapping a denial per [`DenialPolicy`]
    pub fn authorize(&self, requester: &Identity, comment: &Comment) -> Result<()> {
        if Self::can_modify(Some(requester), comment) {
            return Ok(());
        }

        tracing::warn!(
            "{} denied access to comment {} owned by {}",
            requester,
            comment.id,
            comment.author
        );
        Err(match self.denial {
            DenialPolicy::Forbid => NewsError::Forbidden(comment.id),
            DenialPolicy::Conceal => NewsError::CommentNotFound(comment.id),
        })
    }
}
