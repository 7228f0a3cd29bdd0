//! # folio-webserver
//!
//! Rocket web server exposing the JSON API of the folio portfolio site
//! and, behind the `frontend` feature, the embedded static assets.

#[macro_use]
extern crate log;

pub mod web;
