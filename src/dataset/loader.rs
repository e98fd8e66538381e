use super::types::Movie;
use std::path::PathBuf;
use thiserror::Error;

/// Failure modes for bringing the dataset into memory.
///
/// Both variants surface to clients as HTTP 500; the distinction exists for
/// logging and tests.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// File-backed source of movie records.
///
/// Holds only the dataset path. Every `load` re-reads and re-parses the
/// file, so each request observes the file as it currently exists and no
/// state is shared between requests. Constructed once in `main` and injected
/// into handlers through the application state.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    path: PathBuf,
}

impl MovieRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the backing file and parses it into an ordered movie list.
    pub async fn load(&self) -> Result<Vec<Movie>, DatasetError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let movies = serde_json::from_slice(&bytes)?;
        Ok(movies)
    }
}
