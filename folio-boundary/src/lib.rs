use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// One visitor comment as delivered by the listing endpoint.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub name       : String,
    pub email      : String,
    pub message    : String,
    /// RFC 3339 timestamp assigned at write time.
    pub created_at : String,
    pub rating     : Option<u8>,
}

/// A comment submission as accepted by the API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub message: String,
    /// 1 to 5; 0 means unset and is rejected.
    pub rating: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct CommentList {
    pub comments: Vec<Comment>,
    pub average_rating: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ChatMessage {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, thiserror::Error),
    error("{message}")
)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
