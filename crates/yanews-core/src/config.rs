//! Configuration management for yanews

use crate::error::{NewsError, Result};
use crate::moderation::DenialPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Default number of news items on the home page
pub const DEFAULT_NEWS_PER_PAGE: usize = 10;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listing and moderation settings
    pub news: NewsConfig,
    /// Disallowed words
    pub censor: CensorConfig,
    /// URL layout used for redirects
    pub routes: RoutesConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| NewsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NewsError::Io(e).with_context(format!("Reading {}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| NewsError::Config(e.to_string()))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.news.news_per_page == 0 {
            return Err(NewsError::Config(
                "news.news_per_page must be at least 1".to_string(),
            ));
        }
        if self.news.max_comment_length == 0 {
            return Err(NewsError::Config(
                "news.max_comment_length must be at least 1".to_string(),
            ));
        }
        self.routes.validate()
    }
}

/// Listing and moderation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Items shown on the home page
    pub news_per_page: usize,
    /// Maximum comment length in characters
    pub max_comment_length: usize,
    /// How non-owner edit/delete attempts are answered
    pub denial_policy: DenialPolicy,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            news_per_page: DEFAULT_NEWS_PER_PAGE,
            max_comment_length: 2000,
            denial_policy: DenialPolicy::default(),
        }
    }
}

/// Disallowed word list and the warning shown on rejection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensorConfig {
    /// Disallowed substrings, matched case-insensitively
    pub words: BTreeSet<String>,
    /// Rejection message
    pub warning: String,
}

impl Default for CensorConfig {
    fn default() -> Self {
        Self {
            words: ["редиска", "негодяй"]
                .into_iter()
                .map(String::from)
                .collect(),
            warning: "Не ругайтесь!".to_string(),
        }
    }
}

/// URL templates; `{pk}` is replaced by the entity id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub home: String,
    pub news_detail: String,
    pub edit_comment: String,
    pub delete_comment: String,
    pub login: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            news_detail: "/news/{pk}/".to_string(),
            edit_comment: "/edit_comment/{pk}/".to_string(),
            delete_comment: "/delete_comment/{pk}/".to_string(),
            login: "/auth/login/".to_string(),
        }
    }
}

impl RoutesConfig {
    fn validate(&self) -> Result<()> {
        for (name, template) in [
            ("news_detail", &self.news_detail),
            ("edit_comment", &self.edit_comment),
            ("delete_comment", &self.delete_comment),
        ] {
            if !template.contains("{pk}") {
                return Err(NewsError::Config(format!(
                    "routes.{} must contain a {{pk}} placeholder",
                    name
                )));
            }
        }
        Ok(())
    }
}
