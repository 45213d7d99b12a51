//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comment;
pub mod config;
pub mod news;
pub mod seed;

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use yanews_core::{Config, Identity, NewsError, Newsroom, Redirect};
use yanews_storage::FileSystemStorage;

/// Name of the config file looked up in the data directory
const CONFIG_FILE: &str = "config.toml";

/// yanews - news comments moderation
#[derive(Debug, Parser)]
#[command(name = "yanews")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the archive
    #[arg(long, global = true, env = "YANEWS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Act as this user; anonymous when omitted
    #[arg(short, long, global = true, env = "YANEWS_USER")]
    pub user: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill the catalog with a home page worth of news
    Seed(seed::SeedArgs),

    /// Publish a news item
    Publish(news::PublishArgs),

    /// List the most recent news
    Home(news::HomeArgs),

    /// Show a news item with its comments
    Show(news::ShowArgs),

    /// Comment on a news item
    Comment(comment::CommentArgs),

    /// Edit one of your comments
    Edit(comment::EditArgs),

    /// Delete one of your comments
    Delete(comment::DeleteArgs),

    /// List your own comments
    Comments(comment::CommentsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.global.verbose);

    if cli.global.no_color {
        colored::control::set_override(false);
    }

    let global = cli.global;
    match cli.command {
        Commands::Seed(args) => seed::execute(&global, args),
        Commands::Publish(args) => news::publish(&global, args),
        Commands::Home(args) => news::home(&global, args),
        Commands::Show(args) => news::show(&global, args),
        Commands::Comment(args) => comment::submit(&global, args),
        Commands::Edit(args) => comment::edit(&global, args),
        Commands::Delete(args) => comment::delete(&global, args),
        Commands::Comments(args) => comment::list_own(&global, args),
        Commands::Config(cmd) => config::execute(&global, cmd),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

impl GlobalArgs {
    /// Data directory in effect
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(FileSystemStorage::default_dir)
    }

    /// Config file in effect: `--config`, else `<data-dir>/config.toml`
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.data_dir().join(CONFIG_FILE))
    }

    /// Load the configuration; a missing default file means defaults
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        if self.config.is_none() && !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Config::default());
        }
        Config::load(&path).with_context(|| format!("Invalid configuration: {}", path.display()))
    }

    /// The requesting identity, if a user was given
    pub fn identity(&self) -> Result<Option<Identity>> {
        self.user
            .as_deref()
            .map(Identity::new)
            .transpose()
            .context("Invalid --user")
    }

    /// Open the newsroom over the file archive
    pub fn newsroom(&self) -> Result<Newsroom> {
        let config = self.load_config()?;
        let storage = FileSystemStorage::new(self.data_dir())
            .context("Failed to open data directory")?;
        let newsroom = Newsroom::open(config, Arc::new(storage))?;
        Ok(newsroom)
    }
}

/// Print the response line for a successful redirect
pub fn respond(redirect: &Redirect) {
    use colored::Colorize;
    println!("{} {}", "302".green(), redirect.location());
}

/// Print the response line for an outcome error and pass the error on
pub fn respond_err(err: NewsError) -> anyhow::Error {
    use colored::Colorize;

    if err.is_outcome() {
        let status = err.status().to_string();
        match err.location() {
            Some(location) => println!("{} {}", status.yellow(), location),
            None => println!("{}", status.red()),
        }
    }
    err.into()
}
