use super::*;

/// Validates and persists a new comment.
pub fn add_comment(
    connections: &store::Connections,
    new_comment: usecases::NewComment,
) -> Result<Id> {
    let id = usecases::add_comment(&connections.exclusive(), new_comment)?;
    info!("Stored new comment {id}");
    Ok(id)
}
