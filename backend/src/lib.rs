//! # Courses backend
//!
//! A small site that registers user accounts and serves a paginated,
//! filterable listing of additional courses rendered from HTML templates.
//!
//! ## Architecture
//!
//! - [`models`]: user accounts, course rows and the course page view
//! - [`db`]: repository traits, the in-memory and Postgres backends, and the
//!   factory that picks one
//! - [`services`]: registration, password hashing and course query
//!   composition
//! - [`http`]: axum router, handlers, templates and the rate limiter
//! - [`config`] and [`logging`]: process setup used by the server binary

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
