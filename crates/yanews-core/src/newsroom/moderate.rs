//! Editing and deleting comments

use super::Newsroom;
use crate::comment::Comment;
use crate::error::{NewsError, Result};
use crate::routes::Redirect;
use crate::types::{CommentId, Identity};
use tracing::{info, warn};

impl Newsroom {
    /// Replace the text of a comment owned by the requester.
    ///
    /// Checks run in order: authentication, existence, ownership, content.
    pub fn edit(
        &self,
        requester: Option<&Identity>,
        id: CommentId,
        text: &str,
    ) -> Result<Redirect> {
        let editor = self.require_identity(requester, || self.routes.edit_comment(id))?;

        let comment = self.commit(|archive| {
            let comment = archive.comments.get(id)?;
            self.policy.authorize(editor, comment)?;
            if let Err(rejection) = self.validator.screen(text) {
                warn!("Rejected edit of comment {}: {}", id, rejection.reason);
                return Err(NewsError::Rejected(rejection));
            }
            archive.comments.update(id, text)
        })?;

        info!("{} edited comment {}", editor, id);
        Ok(self.routes.comments_of(comment.news))
    }

    /// Delete a comment owned by the requester
    pub fn delete(&self, requester: Option<&Identity>, id: CommentId) -> Result<Redirect> {
        let editor = self.require_identity(requester, || self.routes.delete_comment(id))?;

        let comment = self.commit(|archive| {
            let comment = archive.comments.get(id)?;
            self.policy.authorize(editor, comment)?;
            archive.comments.delete(id)
        })?;

        info!("{} deleted comment {}", editor, id);
        Ok(self.routes.comments_of(comment.news))
    }

    /// Comment to prefill the edit page with
    pub fn open_edit(&self, requester: Option<&Identity>, id: CommentId) -> Result<Comment> {
        let editor = self.require_identity(requester, || self.routes.edit_comment(id))?;
        self.owned_comment(editor, id)
    }

    /// Comment to show on the delete confirmation page
    pub fn open_delete(&self, requester: Option<&Identity>, id: CommentId) -> Result<Comment> {
        let editor = self.require_identity(requester, || self.routes.delete_comment(id))?;
        self.owned_comment(editor, id)
    }

    fn owned_comment(&self, editor: &Identity, id: CommentId) -> Result<Comment> {
        self.snapshot(|archive| {
            let comment = archive.comments.get(id)?;
            self.policy.authorize(editor, comment)?;
            Ok(comment.clone())
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::super::Newsroom;
    use super::*;
    use crate::config::Config;
    use crate::moderation::DenialPolicy;
    use std::sync::Arc;
    use std::thread;

    const EDITED: &str = "Отредактированный текст";

    fn forbid_config() -> Config {
        let mut config = Config::default();
        config.news.denial_policy = DenialPolicy::Forbid;
        config
    }

    #[test]
    fn test_not_author_cant_edit_comments() {
        let (newsroom, news) = newsroom(Config::default());
        let comment = comment(&newsroom, news);

        let err = newsroom
            .edit(Some(&not_author()), comment.id, EDITED)
            .unwrap_err();
        assert!(matches!(err, NewsError::CommentNotFound(_)));
        assert_eq!(err.status(), 404);

        let stored = newsroom.comment(comment.id).unwrap();
        assert_ne!(stored.text, EDITED);
        assert_eq!(stored.author, author());
    }

    #[test]
    fn test_not_author_cant_delete_comments() {
        let (newsroom, news) = newsroom(Config::default());
        let comment = comment(&newsroom, news);

        let err = newsroom.delete(Some(&not_author()), comment.id).unwrap_err();
        assert!(matches!(err.status(), 403 | 404));
        assert!(newsroom.comment(comment.id).is_ok());
    }

    #[test]
    fn test_forbid_policy() {
        let (newsroom, news) = newsroom(forbid_config());
        let comment = comment(&newsroom, news);

        let err = newsroom
            .edit(Some(&not_author()), comment.id, EDITED)
            .unwrap_err();
        assert!(matches!(err, NewsError::Forbidden(id) if id == comment.id));

        let err = newsroom.delete(Some(&not_author()), comment.id).unwrap_err();
        assert_eq!(err.status(), 403);
        assert!(newsroom.comment(comment.id).is_ok());
    }

    #[test]
    fn test_author_can_edit_comments() {
        let (newsroom, news) = newsroom(Config::default());
        let comment = comment(&newsroom, news);

        let redirect = newsroom.edit(Some(&author()), comment.id, EDITED).unwrap();

        let stored = newsroom.comment(comment.id).unwrap();
        assert_eq!(stored.text, EDITED);
        assert_eq!(stored.author, author());
        assert_eq!(stored.created, comment.created);
        assert_eq!(
            redirect.location(),
            format!("{}#comments", newsroom.routes().news_detail(news))
        );
    }

    #[test]
    fn test_author_can_delete_comments() {
        let (newsroom, news) = newsroom(Config::default());
        let comment = comment(&newsroom, news);

        let redirect = newsroom.delete(Some(&author()), comment.id).unwrap();

        assert!(newsroom.comment(comment.id).is_err());
        assert_eq!(redirect.location(), format!("/news/{}/#comments", news));
    }

    #[test]
    fn test_delete_twice() {
        let (newsroom, news) = newsroom(Config::default());
        let comment = comment(&newsroom, news);

        assert!(newsroom.delete(Some(&author()), comment.id).is_ok());
        let err = newsroom.delete(Some(&author()), comment.id).unwrap_err();
        assert!(matches!(err, NewsError::CommentNotFound(_)));
    }

    #[test]
    fn test_anonymous_redirected_before_lookup() {
        let (newsroom, news) = newsroom(Config::default());
        let comment = comment(&newsroom, news);
        let missing = CommentId(999);

        let err = newsroom.edit(None, missing, EDITED).unwrap_err();
        assert_eq!(err.location(), Some("/auth/login/?next=/edit_comment/999/"));

        let err = newsroom.delete(None, missing).unwrap_err();
        assert_eq!(err.location(), Some("/auth/login/?next=/delete_comment/999/"));

        let err = newsroom.delete(None, comment.id).unwrap_err();
        assert_eq!(err.status(), 302);
        assert!(newsroom.comment(comment.id).is_ok());
    }

    #[test]
    fn test_edit_is_censored() {
        let (newsroom, news) = newsroom(Config::default());
        let comment = comment(&newsroom, news);

        let err = newsroom
            .edit(Some(&author()), comment.id, "ах ты негодяй")
            .unwrap_err();
        assert!(matches!(err, NewsError::Rejected(_)));
        assert_eq!(newsroom.comment(comment.id).unwrap().text, comment.text);
    }

    #[test]
    fn test_open_pages() {
        let (newsroom, news) = newsroom(Config::default());
        let comment = comment(&newsroom, news);

        assert_eq!(newsroom.open_edit(Some(&author()), comment.id).unwrap(), comment);
        assert_eq!(newsroom.open_delete(Some(&author()), comment.id).unwrap(), comment);

        let err = newsroom.open_edit(Some(&not_author()), comment.id).unwrap_err();
        assert_eq!(err.status(), 404);
        let err = newsroom.open_delete(None, comment.id).unwrap_err();
        assert_eq!(
            err.location(),
            Some(format!("/auth/login/?next=/delete_comment/{}/", comment.id).as_str())
        );
    }

    #[test]
    fn test_concurrent_edit_and_delete_serialize() {
        let (newsroom, news) = newsroom(Config::default());
        let newsroom: Arc<Newsroom> = Arc::new(newsroom);

        for _ in 0..20 {
            let target = comment(&newsroom, news);

            let editor = {
                let newsroom = Arc::clone(&newsroom);
                thread::spawn(move || newsroom.edit(Some(&author()), target.id, EDITED))
            };
            let deleter = {
                let newsroom = Arc::clone(&newsroom);
                thread::spawn(move || newsroom.delete(Some(&author()), target.id))
            };

            let edited = editor.join().unwrap();
            let deleted = deleter.join().unwrap();

            // the delete always succeeds; an edit that lost the race sees no comment
            assert!(deleted.is_ok());
            if let Err(err) = edited {
                assert!(matches!(err, NewsError::CommentNotFound(id) if id == target.id));
            }
            assert!(newsroom.comment(target.id).is_err());
        }
    }
}
