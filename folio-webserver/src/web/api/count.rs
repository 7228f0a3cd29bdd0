use super::*;

use folio_core::repositories::CommentRepository as _;

#[get("/count/comments")]
pub fn get_count_comments(db: store::Connections) -> Result<usize> {
    Ok(Json(db.shared().count_comments()?))
}
