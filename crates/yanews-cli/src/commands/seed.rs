//! Seed command
//!
//! Fill the catalog with news dated today, yesterday, and so on.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;

use super::GlobalArgs;
use yanews_core::news::NewNews;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Number of news items; defaults to one home page
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
}

/// Execute the seed command
pub fn execute(global: &GlobalArgs, args: SeedArgs) -> Result<()> {
    use colored::Colorize;

    let newsroom = global.newsroom()?;
    let count = args
        .count
        .unwrap_or(newsroom.config().news.news_per_page);

    let items = newsroom.bulk_create(seed_batch(Local::now().date_naive(), count))?;

    println!(
        "{} Published {} news items",
        "✓".green(),
        items.len().to_string().cyan()
    );
    Ok(())
}

fn seed_batch(today: NaiveDate, count: usize) -> Vec<NewNews> {
    (0..count)
        .map(|i| {
            NewNews::new(
                format!("Новость #{}", i),
                format!("Текст новости {}", i),
                today - Duration::days(i as i64),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_batch_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let batch = seed_batch(today, 3);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].date, today);
        assert_eq!(batch[2].date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(batch[1].title, "Новость #1");
    }

    #[test]
    fn test_seed_batch_empty() {
        assert!(seed_batch(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 0).is_empty());
    }
}
