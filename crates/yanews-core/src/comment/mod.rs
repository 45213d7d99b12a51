//! Comment system module
//!
//! Handles comment storage, indexing and chronological listing.

pub mod index;
pub mod model;
pub mod store;

pub use index::CommentIndex;
pub use model::*;
pub use store::CommentStore;
