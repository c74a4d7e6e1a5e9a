//! Hosted REST [`ArtistStore`] speaking the PostgREST dialect (Supabase).
//!
//! Every request carries the project key in both the `apikey` and
//! `Authorization: Bearer` headers. Rows are decoded into [`Artist`] with
//! `serde_json`; a row that does not match the schema is a
//! [`StoreError::Decode`].

use std::time::Duration;

use async_trait::async_trait;
use booker_core::types::DbId;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Response, StatusCode};
use serde::Serialize;

use crate::error::StoreError;
use crate::models::artist::{Artist, CreateArtist};
use crate::store::ArtistStore;

/// Table exposed by the REST endpoint.
const TABLE: &str = "artists";

/// HTTP request timeout for a single store call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Insert payload; `genres` is always an array so the NOT NULL column holds.
#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    spotify_id: &'a str,
    name: &'a str,
    spotify_url: &'a str,
    image_url: Option<&'a str>,
    genres: &'a [String],
}

impl<'a> From<&'a CreateArtist> for InsertRow<'a> {
    fn from(input: &'a CreateArtist) -> Self {
        Self {
            spotify_id: &input.spotify_id,
            name: &input.name,
            spotify_url: &input.spotify_url,
            image_url: input.image_url.as_deref(),
            genres: input.genres(),
        }
    }
}

/// HTTP client for the hosted `artists` table.
#[derive(Debug)]
pub struct RestArtistStore {
    client: reqwest::Client,
    table_url: String,
}

impl RestArtistStore {
    /// Create a client for the project at `base_url` authenticated by `key`.
    ///
    /// * `base_url` - Project URL, e.g. `https://xyz.supabase.co`.
    pub fn new(base_url: &str, key: &str) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(key)
            .map_err(|_| StoreError::Config("store key is not a valid header value".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|_| StoreError::Config("store key is not a valid header value".into()))?;
        headers.insert("apikey", key_value);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            table_url: table_url(base_url),
        })
    }

    /// Run a filtered select and decode every returned row.
    async fn select(&self, query: &[(&str, String)]) -> Result<Vec<Artist>, StoreError> {
        let response = self
            .client
            .get(self.table_url.as_str())
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await?;
        decode_rows(Self::check_status(response).await?).await
    }

    /// Convert a non-2xx response into [`StoreError::Api`].
    async fn check_status(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ArtistStore for RestArtistStore {
    async fn find_by_spotify_id(&self, spotify_id: &str) -> Result<Option<Artist>, StoreError> {
        let rows = self
            .select(&[("spotify_id", eq_filter(spotify_id)), ("limit", "1".into())])
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Artist>, StoreError> {
        let rows = self
            .select(&[("id", eq_filter(&id.to_string())), ("limit", "1".into())])
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, input: &CreateArtist) -> Result<Option<Artist>, StoreError> {
        if self.find_by_spotify_id(&input.spotify_id).await?.is_some() {
            return Err(StoreError::Conflict {
                spotify_id: input.spotify_id.clone(),
            });
        }

        let response = self
            .client
            .post(self.table_url.as_str())
            .header("Prefer", "return=representation")
            .json(&InsertRow::from(input))
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            return Err(StoreError::Conflict {
                spotify_id: input.spotify_id.clone(),
            });
        }

        let rows = decode_rows(Self::check_status(response).await?).await?;
        Ok(rows.into_iter().next())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Artist>, StoreError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        self.select(&[
            ("order", "created_at.asc,id.asc".into()),
            ("offset", offset.max(0).to_string()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let response = self
            .client
            .get(self.table_url.as_str())
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "rest"
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `{base}/rest/v1/artists`, tolerating a trailing slash on `base`.
fn table_url(base_url: &str) -> String {
    format!("{}/rest/v1/{TABLE}", base_url.trim_end_matches('/'))
}

/// PostgREST equality filter value.
fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}

async fn decode_rows(response: Response) -> Result<Vec<Artist>, StoreError> {
    let body = response.text().await?;
    parse_rows(&body)
}

fn parse_rows(body: &str) -> Result<Vec<Artist>, StoreError> {
    Ok(serde_json::from_str(body)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
