//! HTTP Server Module
//!
//! The route table and request handlers for the movie catalog.
//!
//! ## Overview
//! Handlers are thin: load the dataset through the shared repository, run a
//! query operation, render the result, and map failures onto HTTP statuses.
//! A load failure is a 500 with a fixed body, bad positional input is a 400,
//! a query miss is a 404, and unmatched paths fall through to a fixed 404
//! page.
//!
//! ## Responsibilities
//! - **State**: The shared repository and template registry handed to every
//!   handler.
//! - **Handlers**: One `handle_*` function per route.
//! - **Routing**: The dispatch table plus the fallback page.
//!
//! ## Submodules
//! - **`handlers`**: Request handlers and fixed response bodies.
//! - **`router`**: Route table assembly.
//! - **`types`**: Shared application state.

pub mod handlers;
pub mod router;
pub mod types;
