// src/metadata/types.rs
// Flat movie record as returned by the metadata endpoint

use serde::{Deserialize, Serialize};

/// A movie as presented to callers. Only constructed from payloads that carry
/// an `imdbID`; every record has a usable identity.
#[derive(Debug, Clone, Serialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub imdb_rating: String,
    pub imdb_id: String,
}

/// Raw upstream payload. The endpoint uses PascalCase keys and signals
/// not-found with a body that has no `imdbID` (plus `Response: "False"`).
#[derive(Debug, Deserialize)]
pub struct OmdbPayload {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Rated", default)]
    pub rated: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Writer", default)]
    pub writer: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
}

impl OmdbPayload {
    /// Promote the payload to a `MovieRecord`, or `None` when the identity
    /// field is absent (the upstream not-found shape).
    pub fn into_record(self) -> Option<MovieRecord> {
        let imdb_id = self.imdb_id.filter(|id| !id.is_empty())?;

        Some(MovieRecord {
            title: self.title.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            rated: self.rated.unwrap_or_default(),
            released: self.released.unwrap_or_default(),
            runtime: self.runtime.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            director: self.director.unwrap_or_default(),
            writer: self.writer.unwrap_or_default(),
            actors: self.actors.unwrap_or_default(),
            plot: self.plot.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            awards: self.awards.unwrap_or_default(),
            poster: self.poster.unwrap_or_default(),
            imdb_rating: self.imdb_rating.unwrap_or_default(),
            imdb_id,
        })
    }
}
