#[macro_use]
extern crate log;

mod create_comment;
mod load_comments;

pub mod prelude {
    pub use super::{create_comment::*, load_comments::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use folio_core::{entities::*, usecases};

pub(crate) mod store {
    pub use folio_db_jsonfile::Connections;
}

#[cfg(test)]
pub(crate) mod tests;
