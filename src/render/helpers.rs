use handlebars::{Handlebars, JsonValue, handlebars_helper};

use crate::dataset::types::Movie;

pub fn filter_by_metascore(movies: &[Movie], threshold: i64) -> Vec<&Movie> {
    movies
        .iter()
        .filter(|movie| {
            movie
                .metascore
                .parse::<i64>()
                .map(|score| score >= threshold)
                .unwrap_or(false)
        })
        .collect()
}

pub fn highlight_if_blank(value: &str) -> &'static str {
    if value.is_empty() || value == "N/A" {
        "highlight"
    } else {
        ""
    }
}

pub fn register_helpers(registry: &mut Handlebars<'_>) {
    handlebars_helper!(filterByMetascore: |movies: JsonValue, threshold: i64| {
        let records: Vec<Movie> = serde_json::from_value(movies).unwrap_or_default();
        let kept: Vec<&Movie> = filter_by_metascore(&records, threshold);
        serde_json::to_value(&kept).unwrap_or(JsonValue::Null)
    });
    handlebars_helper!(highlightIfBlank: |value: str| {
        highlight_if_blank(value).to_string()
    });

    registry.register_helper("filterByMetascore", Box::new(filterByMetascore));
    registry.register_helper("highlightIfBlank", Box::new(highlightIfBlank));
}
