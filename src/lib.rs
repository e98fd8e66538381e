//! Movie Catalog Library
//!
//! This library crate defines the core modules behind the HTTP binary
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The application is composed of four loosely coupled subsystems:
//!
//! - **`dataset`**: The data access layer. Reads the movie JSON file from disk
//!   and parses it into typed records; every request works on a fresh load.
//! - **`query`**: The lookup logic. Pure functions for positional lookup,
//!   identifier lookup, and case-insensitive title substring search.
//! - **`render`**: The presentation layer. HTML fragment builders, the two
//!   template helper predicates, and the handlebars registry for full pages.
//! - **`server`**: The HTTP layer. Axum handlers, shared application state,
//!   and the route table with its fallback page.

pub mod dataset;
pub mod query;
pub mod render;
pub mod server;
