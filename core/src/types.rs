//! Domain DTOs for the movie catalog API.
//!
//! # Design
//! These types mirror the catalog service's JSON schema but are defined
//! independently from the mock-server crate. Integration tests catch any
//! schema drift between the two. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// A single movie as stored by the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub year_release: i32,
}

/// Request payload for creating a movie. The service assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub title: String,
    pub genre: String,
    pub year_release: i32,
}

impl MovieInput {
    /// Attach a server-assigned id, producing the body of a full update.
    pub fn with_id(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            genre: self.genre,
            year_release: self.year_release,
        }
    }
}

/// Fields for a partial update. Only the fields that are set are sent, as
/// query parameters, and the service leaves the others unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_release: Option<i32>,
}

impl MovieFields {
    /// Query parameters in wire order: `title`, `genre`, `yearRelease`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(genre) = &self.genre {
            pairs.push(("genre", genre.clone()));
        }
        if let Some(year) = self.year_release {
            pairs.push(("yearRelease", year.to_string()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.genre.is_none() && self.year_release.is_none()
    }
}
