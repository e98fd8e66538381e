use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the movie dataset.
///
/// Field names are renamed to the keys used by the backing JSON file, so a
/// serialized `Movie` round-trips byte-compatible with the dataset and
/// template contexts see the original key spelling (`{{Title}}`,
/// `{{Metascore}}`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Movie_ID")]
    pub movie_id: u32,
    #[serde(rename = "Title")]
    pub title: String,
    // Year, imdbRating and Metascore appear as strings or bare numbers
    // depending on the dataset export; both are accepted and normalized
    // to their string form.
    #[serde(rename = "Year", deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(rename = "Rated")]
    pub rated: String,
    #[serde(rename = "Released")]
    pub released: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Writer")]
    pub writer: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Awards")]
    pub awards: String,
    #[serde(rename = "imdbRating", deserialize_with = "string_or_number")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "Metascore", deserialize_with = "string_or_number")]
    pub metascore: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Integer(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}
