//! Comment submission

use super::Newsroom;
use crate::comment::Comment;
use crate::error::{NewsError, Result};
use crate::routes::Redirect;
use crate::types::{Identity, NewsId};
use tracing::{info, warn};

/// A stored comment and where to send the author next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub comment: Comment,
    /// `{news_detail}#comments`
    pub redirect: Redirect,
}

impl Newsroom {
    /// Submit a comment to a news item.
    ///
    /// Anonymous requesters get `Unauthenticated` with a login redirect back
    /// to the news page. Text failing the content rules gives `Rejected`,
    /// carrying the text for re-display. Nothing is stored in either case.
    pub fn submit(
        &self,
        requester: Option<&Identity>,
        news: NewsId,
        text: &str,
    ) -> Result<Submitted> {
        let author = self.require_identity(requester, || self.routes.news_detail(news))?;

        let comment = self.commit(|archive| {
            archive.catalog.get(news)?;
            if let Err(rejection) = self.validator.screen(text) {
                warn!(
                    "Rejected comment by {} on news {}: {}",
                    author, news, rejection.reason
                );
                return Err(NewsError::Rejected(rejection));
            }

            let now = self.clock.now();
            archive
                .comments
                .append(&archive.catalog, author.clone(), news, text, now)
        })?;

        info!("{} commented on news {} ({})", author, news, comment.id);
        Ok(Submitted {
            redirect: self.routes.comments_of(news),
            comment,
        })
    }
}
