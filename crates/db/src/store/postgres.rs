//! PostgreSQL-backed [`ArtistStore`].

use async_trait::async_trait;
use booker_core::types::DbId;

use crate::error::{classify_insert_error, StoreError};
use crate::models::artist::{Artist, CreateArtist};
use crate::repositories::ArtistRepo;
use crate::store::ArtistStore;
use crate::DbPool;

/// Adapts [`ArtistRepo`] to the [`ArtistStore`] capability.
#[derive(Clone)]
pub struct PgArtistStore {
    pool: DbPool,
}

impl PgArtistStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtistStore for PgArtistStore {
    async fn find_by_spotify_id(&self, spotify_id: &str) -> Result<Option<Artist>, StoreError> {
        Ok(ArtistRepo::find_by_spotify_id(&self.pool, spotify_id).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Artist>, StoreError> {
        Ok(ArtistRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert(&self, input: &CreateArtist) -> Result<Option<Artist>, StoreError> {
        if ArtistRepo::find_by_spotify_id(&self.pool, &input.spotify_id)
            .await?
            .is_some()
        {
            return Err(StoreError::Conflict {
                spotify_id: input.spotify_id.clone(),
            });
        }
        ArtistRepo::create(&self.pool, input)
            .await
            .map_err(|e| classify_insert_error(e, &input.spotify_id))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Artist>, StoreError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        Ok(ArtistRepo::list(&self.pool, offset.max(0), limit).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
