//! yanews - news comments moderation CLI
//!
//! Runs the newsroom against an archive in a data directory. Requests are
//! made anonymously unless `--user` (or `YANEWS_USER`) names the reader.
//!
//! ## Quick Start
//!
//! ```bash
//! # Publish a home page worth of news
//! yanews seed
//!
//! # Read
//! yanews home
//! yanews show 1
//!
//! # Comment, then edit or delete your comment
//! yanews --user alice comment 1 "Отличная новость"
//! yanews --user alice edit 1 "Хорошая новость"
//! yanews --user alice delete 1 --yes
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
