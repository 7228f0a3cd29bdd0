use super::prelude::*;
use crate::util::validate;

/// A comment submission before validation.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub message: String,
    /// 1 to 5; 0 means unset.
    pub rating: u8,
}

/// Validates and appends a new comment.
///
/// All validation happens before the repository is touched.
pub fn add_comment<R: CommentRepository>(repo: &R, c: NewComment) -> Result<Id> {
    let NewComment {
        name,
        email,
        message,
        rating,
    } = c;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let email = email.trim();
    if !validate::is_valid_email(email) {
        return Err(Error::EmailAddress);
    }
    let email = email.parse::<EmailAddress>()?;
    let message = message.trim().to_owned();
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }
    let rating = RatingValue::from(rating);
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let new_comment = Comment {
        id: Id::new(),
        created_at: Timestamp::now(),
        name,
        email,
        message,
        rating: Some(rating),
    };
    let id = new_comment.id.clone();
    log::debug!("Creating new comment: id = {id}");
    repo.create_comment(new_comment)?;
    Ok(id)
}
