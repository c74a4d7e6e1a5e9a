//! Repository for the `artists` table.

use booker_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::{Artist, CreateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, spotify_id, name, spotify_url, image_url, genres, created_at, updated_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    ///
    /// Does not check for an existing `spotify_id`; a duplicate surfaces as a
    /// unique violation on `uq_artists_spotify_id`.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (spotify_id, name, spotify_url, image_url, genres)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.spotify_id)
            .bind(&input.name)
            .bind(&input.spotify_url)
            .bind(&input.image_url)
            .bind(input.genres())
            .fetch_optional(pool)
            .await
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an artist by its external platform identifier.
    pub async fn find_by_spotify_id(
        pool: &PgPool,
        spotify_id: &str,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE spotify_id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(spotify_id)
            .fetch_optional(pool)
            .await
    }

    /// List artists in insertion order, skipping `offset` rows.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artists ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
