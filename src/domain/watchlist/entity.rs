// src/domain/watchlist/entity.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieSummary;

/// A named, ordered list of movies owned by the current session.
///
/// `movie_ids` and `movies` are kept in lock-step: same length, same order.
/// Removing by id removes from both; an id never appears twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    /// Server-assigned immutable identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Watchlist name, 1..=50 chars
    pub name: String,

    /// Optional description, up to 200 chars
    #[serde(default)]
    pub description: Option<String>,

    /// Ordered movie ids, no duplicates
    #[serde(rename = "movies")]
    pub movie_ids: Vec<String>,

    /// Materialized display records, one per id in `movie_ids`
    #[serde(rename = "movieDetails")]
    pub movies: Vec<MovieSummary>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Watchlist {
    pub fn contains(&self, movie_id: &str) -> bool {
        self.movie_ids.iter().any(|id| id == movie_id)
    }

    /// Append a movie to both sequences. Returns false (and changes nothing)
    /// if the id is already present.
    pub fn add_movie(&mut self, movie: MovieSummary) -> bool {
        if self.contains(&movie.id) {
            return false;
        }
        self.movie_ids.push(movie.id.clone());
        self.movies.push(movie);
        true
    }

    /// Remove a movie from both sequences, returning its position and the
    /// removed display record so the removal can be reverted exactly.
    pub fn remove_movie(&mut self, movie_id: &str) -> Option<(usize, MovieSummary)> {
        let index = self.movie_ids.iter().position(|id| id == movie_id)?;
        self.movie_ids.remove(index);
        Some((index, self.movies.remove(index)))
    }

    /// Reinsert a previously removed movie at its original position.
    pub fn restore_movie(&mut self, index: usize, movie: MovieSummary) {
        let index = index.min(self.movie_ids.len());
        self.movie_ids.insert(index, movie.id.clone());
        self.movies.insert(index, movie);
    }
}

impl std::fmt::Display for Watchlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
