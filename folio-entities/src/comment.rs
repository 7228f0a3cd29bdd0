use crate::{email::*, id::*, rating::*, time::*};

/// A single visitor submission.
///
/// Comments are immutable once created. There are no update or delete
/// operations anywhere in the system.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub created_at : Timestamp,
    pub name       : String,
    pub email      : EmailAddress,
    pub message    : String,
    // Records written by other clients may lack a rating.
    pub rating     : Option<RatingValue>,
}
