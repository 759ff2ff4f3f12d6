// Low-level database access traits.
// Each repository is responsible for a single record kind.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepo {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    /// Most recent comments first, at most `limit` of them.
    ///
    /// Comments with an equal timestamp are returned in reverse
    /// order of their creation.
    fn recent_comments(&self, limit: usize) -> Result<Vec<Comment>>;

    /// Ids of all stored comments in no particular order.
    fn all_comment_ids(&self) -> Result<Vec<Id>>;

    fn count_comments(&self) -> Result<usize>;

    /// Returns the number of deleted comments.
    fn delete_comments(&self, ids: &[&str]) -> Result<usize>;
}
