//! Profile directory service
//!
//! Lists, searches, creates, edits and deletes personnel profiles held in an
//! in-memory repository, and serves them over a JSON HTTP API.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod query;
pub mod routes;
pub mod store;
