use super::prelude::*;
use crate::{display::display_string, limit::CommentLimit};

/// Loads the most recent comments and renders them as display strings,
/// most recent first.
pub fn recent_comments<R: CommentRepo>(repo: &R, limit: CommentLimit) -> Result<Vec<String>> {
    if limit.get() == 0 {
        return Ok(vec![]);
    }
    let comments = repo.recent_comments(limit.get())?;
    debug_assert!(comments.len() <= limit.get());
    log::debug!("Loaded {} of at most {limit} comments", comments.len());
    Ok(comments.iter().map(display_string).collect())
}
