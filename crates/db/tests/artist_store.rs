//! Integration tests for the PostgreSQL artist store.
//!
//! Exercises the repository and store layers against a real database:
//! - Insert and lookup by internal and external id
//! - Duplicate detection (pre-insert check and unique constraint)
//! - Insertion-ordered pagination
//! - `updated_at` refresh trigger
//!
//! Requires `DATABASE_URL`; run with `cargo test -- --ignored`.

use assert_matches::assert_matches;
use booker_db::models::artist::CreateArtist;
use booker_db::repositories::ArtistRepo;
use booker_db::store::{ArtistStore, PgArtistStore};
use booker_db::StoreError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_artist(spotify_id: &str) -> CreateArtist {
    CreateArtist {
        spotify_id: spotify_id.to_string(),
        name: format!("Artist {spotify_id}"),
        spotify_url: format!("https://open.spotify.com/artist/{spotify_id}"),
        image_url: Some("https://via.placeholder.com/300x300?text=Artist".to_string()),
        genres: Some(vec!["Pop".to_string(), "Rock".to_string()]),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_and_find_by_both_keys(pool: PgPool) {
    let store = PgArtistStore::new(pool);
    let created = store.insert(&new_artist("abc123")).await.unwrap().unwrap();

    assert_eq!(created.spotify_id, "abc123");
    assert_eq!(created.genres, vec!["Pop", "Rock"]);

    let by_id = store.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.as_ref(), Some(&created));

    let by_ext = store.find_by_spotify_id("abc123").await.unwrap();
    assert_eq!(by_ext.as_ref(), Some(&created));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn genres_default_to_empty(pool: PgPool) {
    let store = PgArtistStore::new(pool);
    let mut input = new_artist("nogenres");
    input.genres = None;

    let created = store.insert(&input).await.unwrap().unwrap();
    assert!(created.genres.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_insert_is_conflict(pool: PgPool) {
    let store = PgArtistStore::new(pool.clone());
    store.insert(&new_artist("dup")).await.unwrap();

    let err = store.insert(&new_artist("dup")).await.unwrap_err();
    assert_matches!(err, StoreError::Conflict { spotify_id } if spotify_id == "dup");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn unique_constraint_backs_the_existence_check(pool: PgPool) {
    ArtistRepo::create(&pool, &new_artist("race")).await.unwrap();

    let err = ArtistRepo::create(&pool, &new_artist("race"))
        .await
        .unwrap_err();
    let classified = booker_db::error::classify_insert_error(err, "race");
    assert_matches!(classified, StoreError::Conflict { .. });
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_respects_offset_and_limit(pool: PgPool) {
    let store = PgArtistStore::new(pool);
    for id in ["a1", "b2", "c3", "d4"] {
        store.insert(&new_artist(id)).await.unwrap();
    }

    let all = store.list(0, 100).await.unwrap();
    assert_eq!(all.len(), 4);

    let page = store.list(1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, all[1].id);
    assert_eq!(page[1].id, all[2].id);

    assert!(store.list(50, 10).await.unwrap().is_empty());
    assert!(store.list(0, 0).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_refreshes_updated_at(pool: PgPool) {
    let created = ArtistRepo::create(&pool, &new_artist("touch"))
        .await
        .unwrap()
        .unwrap();

    sqlx::query("UPDATE artists SET name = 'Renamed' WHERE id = $1")
        .bind(created.id)
        .execute(&pool)
        .await
        .unwrap();

    let updated = ArtistRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn ping_succeeds(pool: PgPool) {
    let store = PgArtistStore::new(pool);
    store.ping().await.unwrap();
}
