// src/domain/profile.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The logged-in user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,

    pub username: String,

    pub email: String,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(rename = "favoriteGenres", default)]
    pub favorite_genres: Vec<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Partial profile update. Absent fields are left unchanged by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(rename = "favoriteGenres", skip_serializing_if = "Option::is_none")]
    pub favorite_genres: Option<Vec<String>>,
}
