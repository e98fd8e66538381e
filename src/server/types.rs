use std::sync::Arc;

use handlebars::Handlebars;

use crate::dataset::loader::MovieRepository;

/// Shared application state, cloned into each handler invocation.
///
/// The repository carries only the dataset path; the template registry is
/// built once at startup and shared.
#[derive(Clone)]
pub struct AppState {
    pub repository: MovieRepository,
    pub templates: Arc<Handlebars<'static>>,
}
