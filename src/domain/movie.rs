// src/domain/movie.rs
use serde::{Deserialize, Serialize};

/// The display record for a movie as it appears in feeds, search results,
/// favorites and watchlists. Immutable once fetched; never locally mutated,
/// only replaced wholesale by re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Opaque server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    pub poster_path: String,

    pub release_date: String,

    /// Community average rating on a 0..10 scale
    pub vote_average: f64,
}

/// A movie genre as served by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub character: String,
    pub profile_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    pub job: String,
    pub profile_path: String,
}

/// Full movie detail, fetched for the detail view only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    pub overview: String,

    pub poster_path: String,

    pub backdrop_path: String,

    pub release_date: String,

    pub vote_average: f64,

    pub vote_count: u64,

    /// Raw genre ids as served alongside the resolved `genres`
    #[serde(default)]
    pub genre_ids: Vec<i64>,

    #[serde(default)]
    pub genres: Vec<Genre>,

    /// Runtime in minutes
    pub runtime: u32,

    #[serde(default)]
    pub cast: Vec<CastMember>,

    #[serde(default)]
    pub crew: Vec<CrewMember>,

    #[serde(default)]
    pub similar: Vec<MovieSummary>,

    pub popularity: f64,
}

impl Movie {
    /// Project the detail record down to its feed/list representation.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            vote_average: self.vote_average,
        }
    }
}
