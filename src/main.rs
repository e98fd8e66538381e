use std::net::SocketAddr;
use std::sync::Arc;

use movie_catalog::dataset::loader::MovieRepository;
use movie_catalog::render::templates::build_registry;
use movie_catalog::server::router::build_router;
use movie_catalog::server::types::AppState;

const DEFAULT_PORT: u16 = 3000;
const DATASET_PATH: &str = "movie-dataset.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let state = AppState {
        repository: MovieRepository::new(DATASET_PATH),
        templates: Arc::new(build_registry()?),
    };
    let app = build_router(state);

    tracing::info!("Movie catalog listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
