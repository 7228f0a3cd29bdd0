// Low-level database access traits.
// The repository is responsible for a single entity. Related entities
// are only referenced by their id and never modified or loaded by
// another repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepository {
    /// Appends a single immutable comment.
    ///
    /// Either the whole document is stored or nothing is,
    /// there are no partial writes.
    fn create_comment(&self, comment: Comment) -> Result<()>;

    fn all_comments(&self) -> Result<Vec<Comment>>;

    fn count_comments(&self) -> Result<usize>;
}
