//! Artist entity model and DTOs.

use booker_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `artists` table.
///
/// Also the decode target for rows returned by the hosted REST store, so a
/// malformed row fails to deserialize instead of leaking through untyped.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Artist {
    pub id: DbId,
    pub spotify_id: String,
    pub name: String,
    pub spotify_url: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub spotify_id: String,
    pub name: String,
    pub spotify_url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Omitted and `null` both mean no genres.
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

impl CreateArtist {
    /// Genre labels to store, empty when none were supplied.
    pub fn genres(&self) -> &[String] {
        self.genres.as_deref().unwrap_or_default()
    }
}
