//! In-memory [`ArtistStore`] used when no store credentials are configured.
//!
//! Data lives for the lifetime of the process. Suitable for local development
//! and for driving the HTTP layer in tests.

use async_trait::async_trait;
use booker_core::types::DbId;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::artist::{Artist, CreateArtist};
use crate::store::ArtistStore;

/// Insertion-ordered artist collection behind an async lock.
#[derive(Default)]
pub struct MemoryArtistStore {
    artists: RwLock<Vec<Artist>>,
}

impl MemoryArtistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored artists.
    pub async fn len(&self) -> usize {
        self.artists.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.artists.read().await.is_empty()
    }
}

#[async_trait]
impl ArtistStore for MemoryArtistStore {
    async fn find_by_spotify_id(&self, spotify_id: &str) -> Result<Option<Artist>, StoreError> {
        let artists = self.artists.read().await;
        Ok(artists.iter().find(|a| a.spotify_id == spotify_id).cloned())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Artist>, StoreError> {
        let artists = self.artists.read().await;
        Ok(artists.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, input: &CreateArtist) -> Result<Option<Artist>, StoreError> {
        let mut artists = self.artists.write().await;
        if artists.iter().any(|a| a.spotify_id == input.spotify_id) {
            return Err(StoreError::Conflict {
                spotify_id: input.spotify_id.clone(),
            });
        }

        let now = Utc::now();
        let artist = Artist {
            id: Uuid::new_v4(),
            spotify_id: input.spotify_id.clone(),
            name: input.name.clone(),
            spotify_url: input.spotify_url.clone(),
            image_url: input.image_url.clone(),
            genres: input.genres().to_vec(),
            created_at: now,
            updated_at: now,
        };
        artists.push(artist.clone());
        Ok(Some(artist))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Artist>, StoreError> {
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        let artists = self.artists.read().await;
        Ok(artists.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
