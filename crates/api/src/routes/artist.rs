//! Route definitions for the `/artists` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Routes for `/artists`.
///
/// List and create answer on both `/artists` and `/artists/` so clients
/// written against either form keep working.
///
/// ```text
/// GET    /artists            -> list
/// POST   /artists            -> create
/// GET    /artists/           -> list
/// POST   /artists/           -> create
/// POST   /artists/preview    -> preview
/// GET    /artists/preview    -> 404, same as any non-UUID id
/// GET    /artists/{id}       -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artist::list).post(artist::create))
        .route("/artists/", get(artist::list).post(artist::create))
        .route(
            "/artists/preview",
            post(artist::preview).get(artist::get_preview_as_id),
        )
        .route("/artists/{id}", get(artist::get_by_id))
}
