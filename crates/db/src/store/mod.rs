//! The persistence gateway.
//!
//! [`ArtistStore`] is the only way handlers reach stored artists. One
//! instance is built at startup by [`connect_store`] and shared through
//! application state as `Arc<dyn ArtistStore>`.

pub mod memory;
pub mod postgres;
pub mod rest;

use std::sync::Arc;

use async_trait::async_trait;
use booker_core::types::DbId;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::artist::{Artist, CreateArtist};

pub use memory::MemoryArtistStore;
pub use postgres::PgArtistStore;
pub use rest::RestArtistStore;

/// Storage capability for the `artists` collection.
#[async_trait]
pub trait ArtistStore: Send + Sync {
    /// Look up an artist by external platform identifier.
    async fn find_by_spotify_id(&self, spotify_id: &str) -> Result<Option<Artist>, StoreError>;

    /// Look up an artist by internal ID.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Artist>, StoreError>;

    /// Insert a new artist.
    ///
    /// Checks for an existing `spotify_id` immediately before writing and
    /// fails with [`StoreError::Conflict`] if one is found. The check is not
    /// atomic with the write. Returns `Ok(None)` if the store accepted the
    /// request but reported no inserted row.
    async fn insert(&self, input: &CreateArtist) -> Result<Option<Artist>, StoreError>;

    /// List artists in insertion order. `offset` and `limit` describe a
    /// half-open range; an offset past the end yields an empty list.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Artist>, StoreError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release connections. Called once during shutdown.
    async fn close(&self) {}

    /// Short backend name used in logs.
    fn backend(&self) -> &'static str;
}

/// Build the store selected by `config`.
///
/// PostgreSQL stores run pending migrations before being returned.
pub async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn ArtistStore>, StoreError> {
    match config {
        StoreConfig::Postgres { database_url } => {
            let pool = crate::create_pool(database_url).await?;
            tracing::info!("Database connection pool created");
            crate::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");
            Ok(Arc::new(PgArtistStore::new(pool)))
        }
        StoreConfig::Rest { url, key } => {
            let store = RestArtistStore::new(url, key)?;
            tracing::info!(url = %url, "Hosted REST store client initialized");
            Ok(Arc::new(store))
        }
        StoreConfig::Memory => {
            tracing::warn!("Store credentials not configured. Using in-memory store.");
            Ok(Arc::new(MemoryArtistStore::new()))
        }
    }
}
