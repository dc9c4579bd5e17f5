//! Post service integration tests
//!
//! Exercise create/list/delete and the listing cache over an in-memory
//! store with an owner-query counter.

mod common;

use common::test_app;
use postline::error::ApiError;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_create_then_list() {
    let app = test_app();

    let post_id = app.posts.create_post(1, "hello").await.unwrap();

    let listing = app.posts.get_posts(1).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, post_id);
    assert_eq!(listing[0].text, "hello");
}

#[tokio::test]
async fn test_second_list_served_from_cache() {
    let app = test_app();

    app.posts.create_post(1, "hello").await.unwrap();

    let first = app.posts.get_posts(1).await.unwrap();
    assert_eq!(app.post_store.owner_queries(), 1);

    // Within the TTL the store must not be queried again, and the
    // listing comes back unchanged.
    let second = app.posts.get_posts(1).await.unwrap();
    assert_eq!(app.post_store.owner_queries(), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_listings_are_per_user() {
    let app = test_app();

    app.posts.create_post(1, "mine").await.unwrap();
    app.posts.create_post(2, "yours").await.unwrap();

    let mine = app.posts.get_posts(1).await.unwrap();
    let yours = app.posts.get_posts(2).await.unwrap();

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].text, "mine");
    assert_eq!(yours.len(), 1);
    assert_eq!(yours[0].text, "yours");
}

#[tokio::test]
async fn test_delete_foreign_post_refused() {
    let app = test_app();

    // User 2 owns the post; user 1 tries to delete it
    let post_id = app.posts.create_post(2, "not yours").await.unwrap();

    let err = app.posts.delete_post(1, post_id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFoundOrForbidden));

    // The post survives and its owner still sees it
    let listing = app.posts.get_posts(2).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].text, "not yours");
}

#[tokio::test]
async fn test_delete_missing_post_refused() {
    let app = test_app();

    let err = app.posts.delete_post(1, 999).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFoundOrForbidden));
}

#[tokio::test]
async fn test_delete_invalidates_cache() {
    let app = test_app();

    let first_id = app.posts.create_post(1, "first").await.unwrap();
    app.posts.create_post(1, "second").await.unwrap();

    // Warm the cache
    let listing = app.posts.get_posts(1).await.unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(app.post_store.owner_queries(), 1);

    app.posts.delete_post(1, first_id).await.unwrap();

    // The immediate relist reflects the removal, via a fresh store query
    let listing = app.posts.get_posts(1).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].text, "second");
    assert_eq!(app.post_store.owner_queries(), 2);
}

#[tokio::test]
async fn test_create_invalidates_cache() {
    let app = test_app();

    app.posts.create_post(1, "first").await.unwrap();

    // Warm the cache
    let listing = app.posts.get_posts(1).await.unwrap();
    assert_eq!(listing.len(), 1);

    app.posts.create_post(1, "second").await.unwrap();

    // The new post is visible immediately
    let listing = app.posts.get_posts(1).await.unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(app.post_store.owner_queries(), 2);
}

#[tokio::test]
async fn test_failed_delete_keeps_cache_warm() {
    let app = test_app();

    app.posts.create_post(1, "keep").await.unwrap();
    app.posts.get_posts(1).await.unwrap();
    assert_eq!(app.post_store.owner_queries(), 1);

    // A refused delete must not invalidate the owner's cached listing
    let _ = app.posts.delete_post(1, 999).await.unwrap_err();

    app.posts.get_posts(1).await.unwrap();
    assert_eq!(app.post_store.owner_queries(), 1);
}
