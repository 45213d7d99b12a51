//! News data models

use crate::types::NewsId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A published news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub text: String,
    /// Publication date
    pub date: NaiveDate,
}

/// Input for publishing a news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNews {
    pub title: String,
    pub text: String,
    pub date: NaiveDate,
}

impl NewNews {
    pub fn new(title: impl Into<String>, text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            date,
        }
    }
}
