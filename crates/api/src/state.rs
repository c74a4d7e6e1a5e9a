use std::sync::Arc;

use booker_core::profile::ProfileSource;
use booker_db::ArtistStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` (or per test) and cloned into each request; every
/// field is behind an `Arc`, so nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway for artist records.
    pub store: Arc<dyn ArtistStore>,
    /// Profile lookup used by the preview endpoint.
    pub profiles: Arc<dyn ProfileSource>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
