//! Config command
//!
//! Inspect and initialize yanews configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;

use super::GlobalArgs;
use yanews_core::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file path
    Path,

    /// Write the default configuration
    Init {
        /// Overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(global: &GlobalArgs, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(global, json),
        ConfigCommand::Path => {
            println!("{}", global.config_path().display());
            Ok(())
        }
        ConfigCommand::Init { force } => init_config(global, force),
    }
}

fn show_config(global: &GlobalArgs, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = global.load_config()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let path = global.config_path();
    println!("{}", "Configuration:".bold().underline());
    if path.exists() {
        println!("{}", path.display().to_string().dimmed());
    } else {
        println!("{}", "(defaults)".dimmed());
    }
    println!();
    println!("{}", config.to_toml_string()?);
    Ok(())
}

fn init_config(global: &GlobalArgs, force: bool) -> Result<()> {
    use colored::Colorize;

    let config_path = global.config_path();

    if config_path.exists() {
        if !force {
            use dialoguer::Confirm;

            let confirmed = Confirm::new()
                .with_prompt("Overwrite existing configuration with defaults?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("Init cancelled.");
                return Ok(());
            }
        }

        // Backup existing
        let backup_path = format!(
            "{}.backup-{}",
            config_path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(&config_path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = format!(
        "# yanews configuration\n\n{}",
        Config::default().to_toml_string()?
    );
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Wrote default configuration to {}",
        "✓".green(),
        config_path.display()
    );
    Ok(())
}
