//! Movie Dataset Module
//!
//! Owns the on-disk representation of the movie catalog and the code that
//! brings it into memory.
//!
//! ## Workflow
//! 1. **Read**: `MovieRepository` reads the JSON file asynchronously.
//! 2. **Parse**: raw bytes are decoded into an ordered `Vec<Movie>`.
//! 3. **Hand off**: callers receive plain owned values; nothing is cached
//!    between loads.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
