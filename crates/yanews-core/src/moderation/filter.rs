//! Content filtering and comment text validation

use crate::config::CensorConfig;
use serde::{Deserialize, Serialize};

/// Reason given for blank comment text
pub const REQUIRED_FIELD: &str = "Обязательное поле.";

/// Outcome of checking a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(String),
}

/// A rejected submission, carrying the user's text so it can be re-edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub reason: String,
    pub text: String,
}

/// Rejects text containing any configured word.
///
/// Matching is a case-insensitive substring search with no word
/// boundaries: "РЕДИСКАми" is rejected just like "редиска".
#[derive(Debug, Clone)]
pub struct ContentFilter {
    /// Lower-cased disallowed words
    words: Vec<String>,
    warning: String,
}

impl ContentFilter {
    pub fn new(config: &CensorConfig) -> Self {
        Self {
            words: config
                .words
                .iter()
                .map(|w| w.trim().to_lowercase())
                // an empty needle would match every text
                .filter(|w| !w.is_empty())
                .collect(),
            warning: config.warning.clone(),
        }
    }

    pub fn check(&self, text: &str) -> Verdict {
        let haystack = text.to_lowercase();
        match self.words.iter().find(|w| haystack.contains(w.as_str())) {
            Some(word) => {
                tracing::debug!("Disallowed word {:?} found", word);
                Verdict::Rejected(self.warning.clone())
            }
            None => Verdict::Accepted,
        }
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(&CensorConfig::default())
    }
}

/// Validator for submitted and edited comment text
#[derive(Debug, Clone)]
pub struct CommentValidator {
    max_length: usize,
    filter: ContentFilter,
}

impl CommentValidator {
    pub fn new(max_length: usize, filter: ContentFilter) -> Self {
        Self { max_length, filter }
    }

    /// Required field, then length, then the content filter
    pub fn validate(&self, text: &str) -> Verdict {
        if text.trim().is_empty() {
            return Verdict::Rejected(REQUIRED_FIELD.to_string());
        }

        let length = text.chars().count();
        if length > self.max_length {
            return Verdict::Rejected(format!(
                "Убедитесь, что это значение содержит не более {} символов (сейчас {}).",
                self.max_length, length
            ));
        }

        self.filter.check(text)
    }

    /// Validate, turning a rejection into a [`Rejection`] that keeps the text
    pub fn screen(&self, text: &str) -> std::result::Result<(), Rejection> {
        match self.validate(text) {
            Verdict::Accepted => Ok(()),
            Verdict::Rejected(reason) => Err(Rejection {
                reason,
                text: text.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn censor(words: &[&str]) -> CensorConfig {
        CensorConfig {
            words: words.iter().map(|w| w.to_string()).collect::<BTreeSet<_>>(),
            warning: "Не ругайтесь!".to_string(),
        }
    }

    #[test]
    fn test_clean_text_accepted() {
        let filter = ContentFilter::default();
        assert_eq!(filter.check("Новый текст"), Verdict::Accepted);
    }

    #[test]
    fn test_warning_with_word_list_rejected() {
        let filter = ContentFilter::default();
        let text = "Не ругайтесь!, ('редиска', 'негодяй')";
        assert_eq!(
            filter.check(text),
            Verdict::Rejected("Не ругайтесь!".to_string())
        );
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let filter = ContentFilter::new(&censor(&["редиска"]));
        assert!(matches!(filter.check("Ты РЕДИСКА"), Verdict::Rejected(_)));
        assert!(matches!(filter.check("редисками"), Verdict::Rejected(_)));
        assert_eq!(filter.check("редис"), Verdict::Accepted);
    }

    #[test]
    fn test_empty_word_list_accepts_everything() {
        let filter = ContentFilter::new(&censor(&[]));
        assert_eq!(filter.check("редиска"), Verdict::Accepted);

        let filter = ContentFilter::new(&censor(&["", "  "]));
        assert_eq!(filter.check("anything"), Verdict::Accepted);
    }

    #[test]
    fn test_validator_required_field() {
        let validator = CommentValidator::new(100, ContentFilter::default());
        assert_eq!(
            validator.validate("   "),
            Verdict::Rejected(REQUIRED_FIELD.to_string())
        );
    }

    #[test]
    fn test_validator_counts_characters() {
        let validator = CommentValidator::new(5, ContentFilter::default());
        assert!(matches!(validator.validate("привет"), Verdict::Rejected(_)));
        assert_eq!(validator.validate("слово"), Verdict::Accepted);
    }

    #[test]
    fn test_screen_keeps_text() {
        let validator = CommentValidator::new(100, ContentFilter::default());
        let rejection = validator.screen("вот негодяй").unwrap_err();
        assert_eq!(rejection.text, "вот негодяй");
        assert_eq!(rejection.reason, "Не ругайтесь!");
        assert!(validator.screen("всё хорошо").is_ok());
    }
}
