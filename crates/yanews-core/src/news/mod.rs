//! News module
//!
//! Published news items and the recency listing of the home page.

pub mod catalog;
pub mod model;

pub use catalog::NewsCatalog;
pub use model::{NewNews, NewsItem};
