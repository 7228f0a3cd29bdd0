//! # folio-core
//!
//! Repositories, gateways and use cases of the folio portfolio site.
//! This crate contains no I/O; concrete bindings live in the
//! `folio-db-*` and `folio-gateways` crates.

pub mod entities {
    pub use folio_entities::{comment::*, email::*, id::*, rating::*, time::*};
}

pub mod gateways {
    pub mod chat;
}

pub mod rating;
pub mod repositories;
pub mod usecases;

pub mod util {
    pub mod validate;
}
