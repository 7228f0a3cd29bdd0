use folio_core::entities::*;
use serde::{Deserialize, Serialize};

/// The stored document model of a comment.
///
/// The document key is the comment id, so it is not repeated
/// in the document body.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: Option<u8>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl From<Comment> for CommentRecord {
    fn from(from: Comment) -> Self {
        let Comment {
            id: _,
            created_at,
            name,
            email,
            message,
            rating,
        } = from;
        Self {
            name,
            email: email.into_string(),
            message,
            rating: rating.map(u8::from),
            created_at: created_at.as_millis(),
        }
    }
}

impl CommentRecord {
    pub fn into_comment(self, id: Id) -> Comment {
        let Self {
            name,
            email,
            message,
            rating,
            created_at,
        } = self;
        Comment {
            id,
            created_at: Timestamp::from_millis(created_at),
            name,
            email: EmailAddress::new_unchecked(email),
            message,
            rating: rating.map(RatingValue::from),
        }
    }
}
