//! Dataset Module Tests
//!
//! Validates file loading, the error taxonomy, and the movie record model.
//!
//! ## Test Scopes
//! - **Loader**: readable files parse, unreadable files fail as `Io`,
//!   malformed content fails as `Parse`.
//! - **Model**: hybrid string/number fields normalize, serialization keeps
//!   the original JSON key names.

#[cfg(test)]
mod tests {
    use crate::dataset::loader::{DatasetError, MovieRepository};
    use crate::dataset::types::Movie;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_DATASET: &str = r#"[
        {
            "Movie_ID": 1,
            "Title": "Inception",
            "Year": "2010",
            "Rated": "PG-13",
            "Released": "16 Jul 2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Writer": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "Plot": "A thief who steals corporate secrets through dream-sharing technology.",
            "Language": "English, Japanese, French",
            "Country": "USA, UK",
            "Awards": "Won 4 Oscars.",
            "imdbRating": "8.8",
            "imdbVotes": "2,250,000",
            "Metascore": "74"
        },
        {
            "Movie_ID": 2,
            "Title": "The Room",
            "Year": 2003,
            "Rated": "R",
            "Released": "27 Jun 2003",
            "Runtime": "99 min",
            "Genre": "Drama",
            "Director": "Tommy Wiseau",
            "Writer": "Tommy Wiseau",
            "Actors": "Tommy Wiseau, Juliette Danielle",
            "Plot": "A successful banker watches his life unravel.",
            "Language": "English",
            "Country": "USA",
            "Awards": "N/A",
            "imdbRating": 3.6,
            "imdbVotes": "135,000",
            "Metascore": "N/A"
        }
    ]"#;

    fn dataset_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp dataset");
        file.write_all(contents.as_bytes()).expect("write dataset");
        file
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_load_parses_movie_array() {
        let file = dataset_file(SAMPLE_DATASET);
        let repository = MovieRepository::new(file.path());

        let movies = repository.load().await.expect("dataset should load");

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].movie_id, 1);
        assert_eq!(movies[0].title, "Inception");
        assert_eq!(movies[1].director, "Tommy Wiseau");
    }

    #[tokio::test]
    async fn test_load_preserves_dataset_order() {
        let file = dataset_file(SAMPLE_DATASET);
        let repository = MovieRepository::new(file.path());

        let movies = repository.load().await.unwrap();

        let ids: Vec<u32> = movies.iter().map(|movie| movie.movie_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let repository = MovieRepository::new("/nonexistent/movie-dataset.json");

        let err = repository.load().await.unwrap_err();

        assert!(matches!(err, DatasetError::Io(_)), "got: {:?}", err);
    }

    #[tokio::test]
    async fn test_load_malformed_json_is_parse_error() {
        let file = dataset_file("this is not json at all");
        let repository = MovieRepository::new(file.path());

        let err = repository.load().await.unwrap_err();

        assert!(matches!(err, DatasetError::Parse(_)), "got: {:?}", err);
    }

    #[tokio::test]
    async fn test_load_rejects_non_array_document() {
        // A single object is valid JSON but not a valid dataset.
        let file = dataset_file(r#"{"Movie_ID": 1}"#);
        let repository = MovieRepository::new(file.path());

        let err = repository.load().await.unwrap_err();

        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_rejects_incomplete_record() {
        // Records missing required keys are malformed, not defaulted.
        let file = dataset_file(r#"[{"Movie_ID": 1, "Title": "Orphan"}]"#);
        let repository = MovieRepository::new(file.path());

        let err = repository.load().await.unwrap_err();

        assert!(matches!(err, DatasetError::Parse(_)));
    }

    // ============================================================
    // MODEL TESTS - hybrid fields
    // ============================================================

    #[tokio::test]
    async fn test_hybrid_fields_normalize_numbers_to_strings() {
        let file = dataset_file(SAMPLE_DATASET);
        let repository = MovieRepository::new(file.path());

        let movies = repository.load().await.unwrap();

        // First record carries strings, second carries bare numbers.
        assert_eq!(movies[0].year, "2010");
        assert_eq!(movies[1].year, "2003");
        assert_eq!(movies[1].imdb_rating, "3.6");
    }

    #[tokio::test]
    async fn test_sentinel_values_are_preserved() {
        let file = dataset_file(SAMPLE_DATASET);
        let repository = MovieRepository::new(file.path());

        let movies = repository.load().await.unwrap();

        assert_eq!(movies[1].metascore, "N/A");
        assert_eq!(movies[1].awards, "N/A");
    }

    // ============================================================
    // MODEL TESTS - serialization
    // ============================================================

    #[test]
    fn test_movie_serializes_with_original_keys() {
        let movies: Vec<Movie> = serde_json::from_str(SAMPLE_DATASET).unwrap();
        let value = serde_json::to_value(&movies[0]).unwrap();

        // Template contexts rely on the dataset key spelling.
        assert_eq!(value["Movie_ID"], 1);
        assert_eq!(value["Title"], "Inception");
        assert_eq!(value["imdbRating"], "8.8");
        assert_eq!(value["Metascore"], "74");
        assert!(value.get("movie_id").is_none());
    }

    #[test]
    fn test_movie_roundtrip() {
        let movies: Vec<Movie> = serde_json::from_str(SAMPLE_DATASET).unwrap();

        let json = serde_json::to_string(&movies[0]).expect("serialization failed");
        let restored: Movie = serde_json::from_str(&json).expect("deserialization failed");

        assert_eq!(restored.movie_id, movies[0].movie_id);
        assert_eq!(restored.title, movies[0].title);
        assert_eq!(restored.metascore, movies[0].metascore);
    }
}
