use std::{ffi::OsStr, path::PathBuf};

use rocket::{get, http::ContentType, routes, Route};
use rust_embed::RustEmbed;

/// Static assets of the single page application,
/// embedded into the server binary.
#[derive(RustEmbed)]
#[folder = "static/"]
struct Asset;

pub fn routes() -> Vec<Route> {
    routes![get_index, get_asset]
}

#[get("/")]
fn get_index() -> Option<(ContentType, Vec<u8>)> {
    let asset = Asset::get("index.html")?;
    Some((ContentType::HTML, asset.data.into_owned()))
}

#[get("/<file..>", rank = 10)]
fn get_asset(file: PathBuf) -> Option<(ContentType, Vec<u8>)> {
    let filename = file.display().to_string();
    let asset = Asset::get(&filename)?;
    let content_type = file
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Bytes);
    Some((content_type, asset.data.into_owned()))
}
