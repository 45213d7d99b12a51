//! News commands
//!
//! Publish news, list the home page and show a single news item.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

use super::{respond_err, GlobalArgs};
use yanews_core::news::{NewNews, NewsItem};
use yanews_core::{NewsDetail, NewsId};

/// Arguments for the publish command
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// News title
    #[arg(long, short)]
    pub title: String,

    /// News text
    #[arg(long, default_value = "")]
    pub text: String,

    /// Publication date (YYYY-MM-DD), today by default
    #[arg(long, short)]
    pub date: Option<String>,
}

/// Arguments for the home command
#[derive(Debug, Args)]
pub struct HomeArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// News ID
    pub id: NewsId,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the publish command
pub fn publish(global: &GlobalArgs, args: PublishArgs) -> Result<()> {
    use colored::Colorize;

    let date = match args.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };

    let newsroom = global.newsroom()?;
    let item = newsroom.publish(NewNews::new(args.title, args.text, date))?;

    println!(
        "{} Published news {} at {}",
        "✓".green(),
        item.id.to_string().cyan(),
        newsroom.routes().news_detail(item.id)
    );
    Ok(())
}

/// Execute the home command
pub fn home(global: &GlobalArgs, args: HomeArgs) -> Result<()> {
    use colored::Colorize;

    let newsroom = global.newsroom()?;
    let items = newsroom.home()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No news yet.");
        return Ok(());
    }

    println!("{} {}", "200".green(), newsroom.routes().home());
    for item in &items {
        println!("{}", format_headline(item).bold());
    }
    Ok(())
}

/// Execute the show command
pub fn show(global: &GlobalArgs, args: ShowArgs) -> Result<()> {
    let newsroom = global.newsroom()?;
    let identity = global.identity()?;

    let detail = newsroom
        .detail(identity.as_ref(), args.id)
        .map_err(respond_err)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        use colored::Colorize;

        println!("{} {}", "200".green(), newsroom.routes().news_detail(args.id));
        print_detail(&detail);
    }
    Ok(())
}

/// Render a detail page
pub fn print_detail(detail: &NewsDetail) {
    use colored::Colorize;

    println!("{}", format_headline(&detail.news).bold().underline());
    if !detail.news.text.trim().is_empty() {
        println!("{}", detail.news.text);
    }
    println!();

    println!("{} ({})", "Comments".bold(), detail.comments.len());
    for comment in &detail.comments {
        println!(
            "  [{}] {} {}",
            comment.id.to_string().cyan(),
            comment.author.to_string().yellow(),
            comment.created.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
        println!("      {}", comment.text);
    }

    if let Some(form) = &detail.form {
        println!();
        match &form.error {
            Some(error) => {
                println!("{} {}", "✗".red(), error);
                println!("  Your text: {}", form.text);
            }
            None => println!("{}", "You can leave a comment.".dimmed()),
        }
    }
}

fn format_headline(item: &NewsItem) -> String {
    format!("[{}] {}: {}", item.id, item.date, item.title)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").context(format!("Invalid date: {}", s))
}
