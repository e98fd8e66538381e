//! Presentation Module
//!
//! Turns query results into response bodies, in two modes.
//!
//! ## Overview
//! Detail and search routes answer with HTML fragments assembled directly
//! from record fields. The greeting and full-dataset pages go through a
//! handlebars registry instead, with two helpers available inside the
//! templates: a metascore threshold filter and a blank-value highlighter.
//! The helpers are plain functions over record data; the handlebars glue
//! only deserializes parameters and delegates.
//!
//! ## Responsibilities
//! - **Fragments**: Fixed-field detail and list snippets plus the two search
//!   forms.
//! - **Helpers**: `filter_by_metascore` and `highlight_if_blank` predicates.
//! - **Registry**: Compiling the embedded templates and wiring the helpers
//!   under their template-visible names.
//!
//! ## Submodules
//! - **`fragments`**: Direct HTML snippet builders.
//! - **`helpers`**: Pure helper functions and their handlebars adapters.
//! - **`templates`**: Registry construction over the embedded `.hbs` files.

pub mod fragments;
pub mod helpers;
pub mod templates;
