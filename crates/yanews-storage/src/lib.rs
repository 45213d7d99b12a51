//! yanews-storage - Storage library for yanews
//!
//! This crate provides a file system backed archive storage.

mod archive_store;

pub use archive_store::FileSystemStorage;
