//! Query Engine Module
//!
//! Pure, synchronous lookup and search operations over an in-memory movie
//! slice.
//!
//! ## Overview
//! Every data route reduces to one of a few questions: which record sits at
//! a given position, which record carries a given identifier, and which
//! records match a title substring. This module answers them without touching
//! I/O or HTTP concerns, so handlers stay thin and the logic stays
//! unit-testable.
//!
//! ## Responsibilities
//! - **Validation**: Parsing raw positional input into a usable index.
//! - **Lookup**: Positional and identifier-based record retrieval.
//! - **Search**: Case-insensitive title substring matching, preserving
//!   dataset order.
//!
//! ## Submodules
//! - **`engine`**: The lookup and search functions.
//! - **`types`**: The query error taxonomy.

pub mod engine;
pub mod types;
