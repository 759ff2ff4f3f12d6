use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub comment : Option<String>,
    pub name    : Option<String>,
}

/// Stores a new comment with the current server time.
///
/// The text fields are neither validated nor sanitized.
pub fn add_comment<R: CommentRepo>(repo: &R, new_comment: NewComment) -> Result<Comment> {
    let NewComment { comment, name } = new_comment;
    let comment = Comment::new(comment, name);
    repo.create_comment(comment.clone())?;
    log::debug!("Added comment {} at {}", comment.id, comment.created_at);
    Ok(comment)
}
