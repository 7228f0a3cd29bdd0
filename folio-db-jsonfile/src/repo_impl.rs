use folio_core::{
    entities::Comment,
    repositories::{CommentRepository, Error as RepoError},
};
use jfs::Store;

use super::{DbReadOnly, DbReadWrite};
use crate::models::CommentRecord;

type Result<T> = std::result::Result<T, RepoError>;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&self.store, comment)
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&self.store)
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&self.store)
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        unreachable!();
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&self.store)
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&self.store)
    }
}

fn create_comment(store: &Store, comment: Comment) -> Result<()> {
    if store.get::<CommentRecord>(comment.id.as_str()).is_ok() {
        return Err(RepoError::AlreadyExists);
    }
    let id = comment.id.clone();
    let record = CommentRecord::from(comment);
    store.save_with_id(&record, id.as_str())?;
    Ok(())
}

fn all_comments(store: &Store) -> Result<Vec<Comment>> {
    let records = store.all::<CommentRecord>()?;
    Ok(records
        .into_iter()
        .map(|(id, record)| record.into_comment(id.into()))
        .collect())
}

fn count_comments(store: &Store) -> Result<usize> {
    Ok(store.all::<CommentRecord>()?.len())
}
