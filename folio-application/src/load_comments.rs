use super::*;

/// Loads all comments together with the aggregate rating,
/// which is recomputed on every call.
pub fn load_comments(connections: &store::Connections) -> Result<usecases::CommentListing> {
    Ok(usecases::load_comments(&connections.shared())?)
}
