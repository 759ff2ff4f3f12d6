use super::prelude::*;

/// Deletes all stored comments unconditionally.
///
/// Returns the number of deleted comments.
pub fn purge_comments<R: CommentRepo>(repo: &R) -> Result<usize> {
    let ids = repo.all_comment_ids()?;
    let ids: Vec<_> = ids.iter().map(Id::as_str).collect();
    let count = repo.delete_comments(&ids)?;
    debug_assert!(count <= ids.len());
    log::info!("Deleted {count} comment(s)");
    Ok(count)
}
