use std::{fmt::Display, result};

use folio_boundary::Error as JsonErrorResponse;
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, store};
use folio_application::prelude as flows;
use folio_core::usecases;

mod chat;
mod comments;
mod count;
mod error;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   comments   --- //
        comments::get_comments,
        comments::post_comment,
        // ---   chat   --- //
        chat::post_chat_message,
        // ---   count   --- //
        count::get_count_comments,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
