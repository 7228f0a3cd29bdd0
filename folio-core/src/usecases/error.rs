use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name must not be empty")]
    Name,
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("Empty comment message")]
    EmptyMessage,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty chat message")]
    EmptyChatMessage,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<folio_entities::email::EmailAddressParseError> for Error {
    fn from(_: folio_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}
