//! URL building and redirect targets

use crate::config::RoutesConfig;
use crate::types::{CommentId, NewsId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anchor of the comment list on the news detail page
pub const COMMENTS_ANCHOR: &str = "comments";

/// A redirect target (the value of a `Location` header)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Redirect(String);

impl Redirect {
    pub fn new(location: impl Into<String>) -> Self {
        Redirect(location.into())
    }

    pub fn location(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves route names to concrete paths
#[derive(Debug, Clone, Default)]
pub struct Routes {
    config: RoutesConfig,
}

impl Routes {
    pub fn new(config: RoutesConfig) -> Self {
        Self { config }
    }

    pub fn home(&self) -> &str {
        &self.config.home
    }

    pub fn login(&self) -> &str {
        &self.config.login
    }

    pub fn news_detail(&self, id: NewsId) -> String {
        fill(&self.config.news_detail, id)
    }

    pub fn edit_comment(&self, id: CommentId) -> String {
        fill(&self.config.edit_comment, id)
    }

    pub fn delete_comment(&self, id: CommentId) -> String {
        fill(&self.config.delete_comment, id)
    }

    /// `{news_detail}#comments`
    pub fn comments_of(&self, id: NewsId) -> Redirect {
        Redirect::new(format!("{}#{}", self.news_detail(id), COMMENTS_ANCHOR))
    }

    /// `{login}?next={next}`; `next` is appended verbatim
    pub fn login_redirect(&self, next: &str) -> Redirect {
        Redirect::new(format!("{}?next={}", self.login(), next))
    }
}

fn fill(template: &str, pk: impl fmt::Display) -> String {
    template.replace("{pk}", &pk.to_string())
}
