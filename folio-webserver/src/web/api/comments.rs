use super::*;

use folio_boundary::{CommentList, NewComment};

#[post("/comments", format = "application/json", data = "<data>")]
pub fn post_comment(db: store::Connections, data: JsonResult<NewComment>) -> Result<()> {
    let NewComment {
        name,
        email,
        message,
        rating,
    } = data?.into_inner();
    let new_comment = usecases::NewComment {
        name,
        email,
        message,
        rating,
    };
    let _ = flows::add_comment(&db, new_comment)?;
    Ok(Json(()))
}

#[get("/comments")]
pub fn get_comments(db: store::Connections) -> Json<CommentList> {
    let listing = match usecases::load_comments(&db.shared()) {
        Ok(listing) => listing,
        Err(err) => {
            // The listing degrades silently, the page stays usable.
            error!("Failed to load comments: {err}");
            usecases::CommentListing {
                comments: vec![],
                avg_rating: Default::default(),
            }
        }
    };
    Json(CommentList::from_entities(
        listing.comments,
        listing.avg_rating,
    ))
}
