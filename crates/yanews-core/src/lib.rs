//! yanews-core - Core library for yanews
//!
//! This crate provides the moderation and authorization core of the news
//! site: the news catalog, comment storage, the content filter, the
//! ownership policy, and the newsroom that runs submissions, edits and
//! deletions against them.

pub mod archive;
pub mod comment;
pub mod config;
pub mod error;
pub mod moderation;
pub mod news;
pub mod newsroom;
pub mod routes;
pub mod types;

pub use config::Config;
pub use error::{NewsError, Result};
pub use newsroom::{NewsDetail, Newsroom, Submitted};
pub use routes::Redirect;
pub use types::*;
