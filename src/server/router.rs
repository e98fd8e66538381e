use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{
    handle_all_data, handle_data, handle_id_search, handle_id_search_form, handle_index,
    handle_movie_by_index, handle_not_found, handle_title_search, handle_title_search_form,
    handle_users,
};
use super::types::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/users", get(handle_users))
        .route("/data", get(handle_data))
        .route("/data/movie/:index", get(handle_movie_by_index))
        .route(
            "/data/search/id/",
            get(handle_id_search_form).post(handle_id_search),
        )
        .route("/data/search/title/", get(handle_title_search_form))
        .route("/data/search/title/result", post(handle_title_search))
        .route("/allData", get(handle_all_data))
        .fallback(handle_not_found)
        .with_state(state)
}
