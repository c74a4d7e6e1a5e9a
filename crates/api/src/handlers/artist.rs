//! Handlers for the `/artists` resource.
//!
//! Each handler is a single linear flow. Domain failures (400/404/409) are
//! returned as-is; anything else surfaces from the store as a sanitized 500.

use axum::extract::{Path, Query, State};
use axum::Json;
use booker_core::artist::validate_create_fields;
use booker_core::error::CoreError;
use booker_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use booker_core::profile::ArtistPreview;
use booker_core::spotify_url::{is_valid_artist_url, parse_artist_id};
use booker_db::models::artist::{Artist, CreateArtist};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::query::{ListArtistsParams, PreviewParams};
use crate::state::AppState;

/// POST /artists/preview?spotify_url=
///
/// Read-only: looks up whether the artist is already stored and fetches the
/// profile, but never writes.
pub async fn preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> AppResult<Json<ArtistPreview>> {
    if !is_valid_artist_url(&params.spotify_url) {
        return Err(AppError::BadRequest("Invalid Spotify artist URL".into()));
    }

    let spotify_id = parse_artist_id(&params.spotify_url).ok_or_else(|| {
        AppError::BadRequest("Could not extract artist ID from URL".into())
    })?;

    let existing = state.store.find_by_spotify_id(spotify_id).await?;

    let profile = state
        .profiles
        .fetch_profile(spotify_id)
        .await
        .ok_or_else(|| {
            tracing::warn!(
                spotify_id,
                source = state.profiles.name(),
                "Profile source returned no profile"
            );
            AppError::Core(CoreError::NotFound {
                entity: "Artist profile",
                id: spotify_id.to_string(),
            })
        })?;

    Ok(Json(ArtistPreview::from_profile(profile, existing.is_some())))
}

/// POST /artists/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArtist>,
) -> AppResult<Json<Artist>> {
    validate_create_fields(
        &input.spotify_id,
        &input.name,
        &input.spotify_url,
        input.image_url.as_deref(),
        input.genres(),
    )?;

    if state
        .store
        .find_by_spotify_id(&input.spotify_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Artist already exists".into(),
        )));
    }

    let artist = state
        .store
        .insert(&input)
        .await?
        .ok_or_else(|| AppError::InternalError("Failed to create artist".into()))?;

    tracing::info!(
        artist_id = %artist.id,
        spotify_id = %artist.spotify_id,
        "Artist created"
    );
    Ok(Json(artist))
}

/// GET /artists/?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListArtistsParams>,
) -> AppResult<Json<Vec<Artist>>> {
    let offset = clamp_offset(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let artists = state.store.list(offset, limit).await?;
    Ok(Json(artists))
}

/// GET /artists/{id}
///
/// An id that is not a UUID cannot match any record and is reported as 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Artist>> {
    let artist_id = Uuid::parse_str(&id).map_err(|_| artist_not_found(&id))?;
    let artist = state
        .store
        .find_by_id(artist_id)
        .await?
        .ok_or_else(|| artist_not_found(&id))?;
    Ok(Json(artist))
}

/// GET /artists/preview
///
/// The static preview path shadows `/artists/{id}`, so a GET here is a
/// lookup of the id `preview`, which is never a UUID.
pub async fn get_preview_as_id() -> AppResult<Json<Artist>> {
    Err(artist_not_found("preview"))
}

fn artist_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id: id.to_string(),
    })
}
