pub mod artist;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                       service banner (GET)
/// /health                 health check (GET)
///
/// /artists                list, create (GET, POST)
/// /artists/               list, create (GET, POST)
/// /artists/preview        preview from profile URL (POST), 404 on GET
/// /artists/{id}           get by internal id (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(artist::router())
}
