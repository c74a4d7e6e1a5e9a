//! Persistence gateway errors.

/// Errors surfaced by an [`ArtistStore`](crate::store::ArtistStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An artist with this external identifier is already stored.
    #[error("Artist with spotify_id {spotify_id} already exists")]
    Conflict { spotify_id: String },

    /// A PostgreSQL error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Applying embedded migrations failed.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// The HTTP request to the hosted store failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The hosted store returned a non-2xx status code.
    #[error("Store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A row returned by the store did not match the `Artist` schema.
    #[error("Failed to decode store row: {0}")]
    Decode(#[from] serde_json::Error),

    /// The store could not be constructed from the given configuration.
    #[error("Invalid store configuration: {0}")]
    Config(String),
}

/// PostgreSQL unique constraint guarding `artists.spotify_id`.
pub const SPOTIFY_ID_CONSTRAINT: &str = "uq_artists_spotify_id";

/// Map a unique-violation on `uq_artists_spotify_id` to [`StoreError::Conflict`].
///
/// Two concurrent creates can both pass the existence check; the constraint
/// catches the loser.
pub fn classify_insert_error(err: sqlx::Error, spotify_id: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some(SPOTIFY_ID_CONSTRAINT)
        {
            return StoreError::Conflict {
                spotify_id: spotify_id.to_string(),
            };
        }
    }
    StoreError::Database(err)
}
