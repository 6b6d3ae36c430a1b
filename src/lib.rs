//! Locate an authentication token in an HTTP request.
//!
//! The token is looked up in the query string, then a header, then a cookie
//! (see [`extract`]). The rest of the crate wires the extractor into axum and
//! runs a small demo service.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod state;
