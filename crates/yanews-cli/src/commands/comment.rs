//! Comment commands
//!
//! Submit, edit, delete and list comments as the `--user` identity.

use anyhow::Result;
use clap::Args;

use super::news::print_detail;
use super::{respond, respond_err, GlobalArgs};
use yanews_core::comment::CommentForm;
use yanews_core::{CommentId, NewsError, NewsId};

/// Arguments for the comment command
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// News ID
    pub news: NewsId,

    /// Comment text
    pub text: String,
}

/// Arguments for the edit command
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Comment ID
    pub id: CommentId,

    /// New text; without it the current text is shown
    pub text: Option<String>,
}

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Comment ID
    pub id: CommentId,

    /// Skip confirmation
    #[arg(long, short)]
    pub yes: bool,
}

/// Arguments for the comments command
#[derive(Debug, Args)]
pub struct CommentsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the comment command
pub fn submit(global: &GlobalArgs, args: CommentArgs) -> Result<()> {
    use colored::Colorize;

    let newsroom = global.newsroom()?;
    let identity = global.identity()?;

    match newsroom.submit(identity.as_ref(), args.news, &args.text) {
        Ok(submitted) => {
            respond(&submitted.redirect);
            println!(
                "{} Comment {} added",
                "✓".green(),
                submitted.comment.id.to_string().cyan()
            );
            Ok(())
        }
        Err(NewsError::Rejected(rejection)) => {
            // re-display the news page with the rejected text
            let err = respond_err(NewsError::Rejected(rejection.clone()));
            let detail = newsroom
                .detail(identity.as_ref(), args.news)?
                .with_rejection(rejection);
            print_detail(&detail);
            Err(err)
        }
        Err(err) => Err(respond_err(err)),
    }
}

/// Execute the edit command
pub fn edit(global: &GlobalArgs, args: EditArgs) -> Result<()> {
    use colored::Colorize;

    let newsroom = global.newsroom()?;
    let identity = global.identity()?;

    let Some(text) = args.text else {
        let comment = newsroom
            .open_edit(identity.as_ref(), args.id)
            .map_err(respond_err)?;
        let form = CommentForm::for_comment(&comment);
        println!("{} {}", "200".green(), newsroom.routes().edit_comment(args.id));
        println!("  {}", form.text);
        return Ok(());
    };

    let redirect = newsroom
        .edit(identity.as_ref(), args.id, &text)
        .map_err(respond_err)?;
    respond(&redirect);
    Ok(())
}

/// Execute the delete command
pub fn delete(global: &GlobalArgs, args: DeleteArgs) -> Result<()> {
    let newsroom = global.newsroom()?;
    let identity = global.identity()?;

    let comment = newsroom
        .open_delete(identity.as_ref(), args.id)
        .map_err(respond_err)?;

    if !args.yes {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt(format!("Delete comment {}: \"{}\"?", comment.id, comment.text))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let redirect = newsroom
        .delete(identity.as_ref(), args.id)
        .map_err(respond_err)?;
    respond(&redirect);
    Ok(())
}

/// Execute the comments command: list the requester's own comments
pub fn list_own(global: &GlobalArgs, args: CommentsArgs) -> Result<()> {
    use colored::Colorize;

    let Some(identity) = global.identity()? else {
        anyhow::bail!("Listing your comments requires --user");
    };

    let newsroom = global.newsroom()?;
    let comments = newsroom.comments_by(&identity)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comments)?);
        return Ok(());
    }

    if comments.is_empty() {
        println!("No comments by {}.", identity);
        return Ok(());
    }

    for comment in &comments {
        println!(
            "  [{}] {} {}",
            comment.id.to_string().cyan(),
            newsroom.routes().news_detail(comment.news).dimmed(),
            comment.created.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
        println!("      {}", comment.text);
    }
    Ok(())
}
