use super::types::QueryError;
use crate::dataset::types::Movie;

pub fn parse_index(raw: &str) -> Result<usize, QueryError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| QueryError::InvalidIndex)
}

pub fn movie_at(movies: &[Movie], index: usize) -> Result<&Movie, QueryError> {
    movies.get(index).ok_or(QueryError::OutOfRange)
}

pub fn find_by_id(movies: &[Movie], movie_id: u32) -> Result<&Movie, QueryError> {
    movies
        .iter()
        .find(|movie| movie.movie_id == movie_id)
        .ok_or(QueryError::NotFound)
}

pub fn search_by_title<'a>(
    movies: &'a [Movie],
    query: &str,
) -> Result<Vec<&'a Movie>, QueryError> {
    let needle = query.to_lowercase();
    let matches: Vec<&Movie> = movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .collect();

    if matches.is_empty() {
        return Err(QueryError::NotFound);
    }
    Ok(matches)
}
