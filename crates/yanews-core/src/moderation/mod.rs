//! Moderation module
//!
//! Content filtering at submission time and the ownership policy that
//! governs edits and deletions.

pub mod filter;
pub mod policy;

pub use filter::{CommentValidator, ContentFilter, Rejection, Verdict, REQUIRED_FIELD};
pub use policy::{AccessPolicy, DenialPolicy};
