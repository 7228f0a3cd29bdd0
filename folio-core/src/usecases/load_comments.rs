use super::prelude::*;
use crate::rating::Rated;

#[derive(Debug, Clone, PartialEq)]
pub struct CommentListing {
    pub comments: Vec<Comment>,
    pub avg_rating: AvgRatingValue,
}

/// Loads all comments, newest first, together with the aggregate rating.
///
/// The aggregate is a pure function of the current comment set and is
/// recomputed on every call. It must never be cached across writes.
pub fn load_comments<R: CommentRepository>(repo: &R) -> Result<CommentListing> {
    let mut comments = repo.all_comments()?;
    comments.sort_unstable_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    let avg_rating = comments.avg_rating().rounded();
    Ok(CommentListing {
        comments,
        avg_rating,
    })
}
