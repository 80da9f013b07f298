//! HTTP route handlers.
//!
//! - `pages`: the server-rendered site (home, article, not-found)
//! - `articles`: the JSON API mirroring the resolution chain's contract
//! - `health`: liveness and configured-tier status

pub mod articles;
pub mod health;
pub mod pages;
