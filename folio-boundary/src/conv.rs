use super::*;
use folio_entities as e;

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
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
            created_at: created_at.to_string(),
            rating: rating.map(u8::from),
        }
    }
}

impl CommentList {
    pub fn from_entities(
        comments: Vec<e::comment::Comment>,
        avg_rating: e::rating::AvgRatingValue,
    ) -> Self {
        Self {
            comments: comments.into_iter().map(Into::into).collect(),
            average_rating: avg_rating.into(),
        }
    }
}
