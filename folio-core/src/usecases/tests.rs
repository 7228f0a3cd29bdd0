use std::cell::RefCell;

use super::prelude::*;

pub use crate::repositories::Error as RepoError;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
}

impl CommentRepository for MockDb {
    fn create_comment(&self, c: Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        if comments.iter().any(|x| x.id == c.id) {
            return Err(RepoError::AlreadyExists);
        }
        comments.push(c);
        Ok(())
    }

    fn all_comments(&self) -> RepoResult<Vec<Comment>> {
        Ok(self.comments.borrow().clone())
    }

    fn count_comments(&self) -> RepoResult<usize> {
        Ok(self.comments.borrow().len())
    }
}
