//! Artist profile lookup.
//!
//! A [`ProfileSource`] turns an external identifier into display metadata
//! (name, image, genres). Callers receive `None` when no profile could be
//! produced; implementations log their own failures instead of returning
//! errors, so swapping the stub for a live provider does not change callers.

use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Display attributes describing an artist, as returned by a profile source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistProfile {
    pub spotify_id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
}

/// A profile plus whether an artist with the same identifier is already
/// stored. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistPreview {
    pub spotify_id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
    pub exists: bool,
}

impl ArtistPreview {
    /// Stamp the caller-computed existence flag onto a fetched profile.
    pub fn from_profile(profile: ArtistProfile, exists: bool) -> Self {
        Self {
            spotify_id: profile.spotify_id,
            name: profile.name,
            image_url: profile.image_url,
            genres: profile.genres,
            exists,
        }
    }
}

// ---------------------------------------------------------------------------
// ProfileSource
// ---------------------------------------------------------------------------

/// Capability for looking up artist profiles by external identifier.
#[async_trait::async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile for `spotify_id`, or `None` if it cannot be produced.
    async fn fetch_profile(&self, spotify_id: &str) -> Option<ArtistProfile>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Which [`ProfileSource`] implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileSourceKind {
    /// Deterministic placeholder data, no network access.
    #[default]
    Stub,
}

impl FromStr for ProfileSourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stub" => Ok(Self::Stub),
            other => Err(CoreError::Validation(format!(
                "Unknown profile source: {other}"
            ))),
        }
    }
}

/// Construct the profile source selected by configuration.
pub fn create_profile_source(kind: ProfileSourceKind) -> Arc<dyn ProfileSource> {
    match kind {
        ProfileSourceKind::Stub => Arc::new(StubProfileSource::new()),
    }
}

// ---------------------------------------------------------------------------
// Stub implementation
// ---------------------------------------------------------------------------

/// Placeholder image served for every stubbed profile.
pub const STUB_IMAGE_URL: &str = "https://via.placeholder.com/300x300?text=Artist";

/// Genre labels attached to every stubbed profile.
pub const STUB_GENRES: [&str; 3] = ["Pop", "Rock", "Electronic"];

/// Number of identifier characters used in the synthesized display name.
const STUB_NAME_PREFIX_CHARS: usize = 8;

/// Deterministic stand-in for the streaming platform's artist endpoint.
#[derive(Debug, Clone, Default)]
pub struct StubProfileSource;

impl StubProfileSource {
    pub fn new() -> Self {
        Self
    }

    fn synthesize(spotify_id: &str) -> ArtistProfile {
        let prefix: String = spotify_id.chars().take(STUB_NAME_PREFIX_CHARS).collect();
        ArtistProfile {
            spotify_id: spotify_id.to_string(),
            name: format!("Artist {prefix}"),
            image_url: Some(STUB_IMAGE_URL.to_string()),
            genres: STUB_GENRES.iter().map(|g| g.to_string()).collect(),
        }
    }
}

#[async_trait::async_trait]
impl ProfileSource for StubProfileSource {
    async fn fetch_profile(&self, spotify_id: &str) -> Option<ArtistProfile> {
        tracing::debug!(spotify_id, "Synthesizing stub artist profile");
        Some(Self::synthesize(spotify_id))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
