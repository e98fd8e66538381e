use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;
use serde_json::json;

use super::types::AppState;
use crate::dataset::loader::DatasetError;
use crate::query::engine::{find_by_id, movie_at, parse_index, search_by_title};
use crate::render::fragments::{ID_SEARCH_FORM, TITLE_SEARCH_FORM, movie_detail, movie_list};

pub const LOAD_ERROR_BODY: &str = "Error loading JSON data";
pub const INVALID_INDEX_BODY: &str = "Invalid index. Please enter a valid index number.";
pub const INVALID_ID_BODY: &str = "Invalid movie ID. Please enter a valid ID number.";
pub const ID_NOT_FOUND_BODY: &str = "Cannot find movie with the given ID.";
pub const TITLE_NOT_FOUND_BODY: &str = "No movies found with that title.";
pub const NOT_FOUND_PAGE: &str = "<h1>404 - ERROR: Try a different Route.</h1>";

#[derive(Deserialize)]
pub struct IdSearchForm {
    pub movie_id: String,
}

#[derive(Deserialize)]
pub struct TitleSearchForm {
    pub movie_title: String,
}

fn load_failure(err: DatasetError) -> (StatusCode, String) {
    tracing::error!("Error loading JSON data: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, LOAD_ERROR_BODY.to_string())
}

pub async fn handle_index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let page = state
        .templates
        .render("index", &json!({ "title": "Movie Catalog" }))
        .map_err(|e| {
            tracing::error!("Failed to render index page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Html(page))
}

pub async fn handle_users() -> &'static str {
    "respond with a resource"
}

pub async fn handle_data(
    State(state): State<AppState>,
) -> Result<&'static str, (StatusCode, String)> {
    let movies = state.repository.load().await.map_err(load_failure)?;

    tracing::info!("Loaded {} movie records", movies.len());
    tracing::debug!("Parsed dataset: {:?}", movies);

    Ok("JSON data is loaded and ready!")
}

pub async fn handle_movie_by_index(
    State(state): State<AppState>,
    Path(raw_index): Path<String>,
) -> Result<String, (StatusCode, String)> {
    let movies = state.repository.load().await.map_err(load_failure)?;

    let index = parse_index(&raw_index)
        .map_err(|_| (StatusCode::BAD_REQUEST, INVALID_INDEX_BODY.to_string()))?;
    let movie = movie_at(&movies, index)
        .map_err(|_| (StatusCode::BAD_REQUEST, INVALID_INDEX_BODY.to_string()))?;

    Ok(format!("Movie ID at index {}: {}", index, movie.movie_id))
}

pub async fn handle_id_search_form() -> Html<&'static str> {
    Html(ID_SEARCH_FORM)
}

pub async fn handle_id_search(
    State(state): State<AppState>,
    Form(form): Form<IdSearchForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let movie_id: u32 = form
        .movie_id
        .trim()
        .parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, INVALID_ID_BODY.to_string()))?;

    let movies = state.repository.load().await.map_err(load_failure)?;

    match find_by_id(&movies, movie_id) {
        Ok(movie) => {
            tracing::debug!("Movie ID {} matched '{}'", movie_id, movie.title);
            Ok(Html(movie_detail(movie)))
        }
        Err(_) => Err((StatusCode::NOT_FOUND, ID_NOT_FOUND_BODY.to_string())),
    }
}

pub async fn handle_title_search_form() -> Html<&'static str> {
    Html(TITLE_SEARCH_FORM)
}

pub async fn handle_title_search(
    State(state): State<AppState>,
    Form(form): Form<TitleSearchForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let movies = state.repository.load().await.map_err(load_failure)?;

    match search_by_title(&movies, &form.movie_title) {
        Ok(matches) => {
            tracing::debug!(
                "Title query '{}' matched {} records",
                form.movie_title,
                matches.len()
            );
            Ok(Html(movie_list(&matches)))
        }
        Err(_) => Err((StatusCode::NOT_FOUND, TITLE_NOT_FOUND_BODY.to_string())),
    }
}

pub async fn handle_all_data(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let movies = state.repository.load().await.map_err(load_failure)?;

    let page = state
        .templates
        .render("all-data", &json!({ "title": "All Movie Data", "movies": movies }))
        .map_err(|e| {
            tracing::error!("Failed to render all-data page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Html(page))
}

pub async fn handle_not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
