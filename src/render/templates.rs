use handlebars::{Handlebars, TemplateError};

use super::helpers::register_helpers;

/// Builds the template registry used by the page routes.
///
/// Templates are embedded at compile time, so registration only fails on a
/// malformed template, which is a startup error.
pub fn build_registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut registry = Handlebars::new();

    registry.register_template_string("index", include_str!("templates/index.hbs"))?;
    registry.register_template_string("all-data", include_str!("templates/all_data.hbs"))?;

    register_helpers(&mut registry);

    Ok(registry)
}
