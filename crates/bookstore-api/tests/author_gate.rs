//! Integration tests for author-only routes and book ownership.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use bookstore_database::store::UserStore;
use helpers::TestApp;

fn dune() -> serde_json::Value {
    json!({ "title": "Dune", "description": "Spice", "price": 1500 })
}

#[tokio::test]
async fn test_publishing_requires_authentication() {
    let app = TestApp::new();
    let response = app.request("POST", "/books", Some(dune()), None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_author_flag_is_checked_on_every_request() {
    let app = TestApp::new();
    let id = app.register("Ann", "a@x.com").await;
    let tokens = app.login("a@x.com").await;

    let response = app
        .request("POST", "/books", Some(dune()), Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("PATCH", "/users/author", None, Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Same token, no re-login.
    let response = app
        .request("POST", "/books", Some(dune()), Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.data()["author_id"], id);

    app.users.set_author(id, false).await.unwrap();
    let response = app
        .request("POST", "/books", Some(dune()), Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_deleted_author_is_not_found() {
    let app = TestApp::new();
    let (_, tokens) = app.author("Ann", "a@x.com").await;

    let response = app
        .request("DELETE", "/users/my_profile", None, Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/books", Some(dune()), Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_only_owner_can_modify_a_book() {
    let app = TestApp::new();
    let (first_id, first) = app.author("Ann", "a@x.com").await;
    let (_, second) = app.author("Bob", "b@x.com").await;

    let created = app
        .request("POST", "/books", Some(dune()), Some(&first.access_token))
        .await;
    let book_id = created.data()["id"].as_i64().unwrap();
    let path = format!("/books/{book_id}");

    let response = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "price": 999 })),
            Some(&second.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("DELETE", &path, None, Some(&second.access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "price": 999 })),
            Some(&first.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["price"], 999);
    assert_eq!(response.data()["title"], "Dune");

    let listed = app
        .request("GET", &format!("/authors/{first_id}/books"), None, None)
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.data().as_array().unwrap().len(), 1);

    let response = app
        .request("DELETE", &path, None, Some(&first.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalogue_reads_are_public() {
    let app = TestApp::new();
    let (id, tokens) = app.author("Ann", "a@x.com").await;
    app.register("Reader", "r@x.com").await;

    app.request("POST", "/books", Some(dune()), Some(&tokens.access_token))
        .await;

    let books = app.request("GET", "/books", None, None).await;
    assert_eq!(books.status, StatusCode::OK);
    assert_eq!(books.data().as_array().unwrap().len(), 1);

    let authors = app.request("GET", "/authors", None, None).await;
    assert_eq!(authors.status, StatusCode::OK);
    let authors = authors.data().as_array().unwrap().clone();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["id"], id);
}

#[tokio::test]
async fn test_invalid_book_body_is_rejected() {
    let app = TestApp::new();
    let (_, tokens) = app.author("Ann", "a@x.com").await;

    let response = app
        .request(
            "POST",
            "/books",
            Some(json!({ "title": "Free", "price": 0 })),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/books",
            Some(json!({ "title": "", "price": 100 })),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
