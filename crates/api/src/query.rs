//! Query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for `GET /artists/` (`?skip=&limit=`).
///
/// Values are clamped in the handler via `clamp_offset` / `clamp_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct ListArtistsParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for `POST /artists/preview`.
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub spotify_url: String,
}
