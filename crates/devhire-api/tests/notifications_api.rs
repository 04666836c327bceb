mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use serde_json::Value;

use uuid::Uuid;

use common::TestApp;

fn ids(body: &Value) -> Vec<String> {
    body["data"]["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn read_notifications_require_authentication() {
    let app = TestApp::new();
    let (status, body) = app.request(Method::GET, "/api/v1/notifications/read", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn refresh_token_is_not_a_session() {
    let app = TestApp::new();
    let user = app.store.add_user(false);
    let refresh = app.jwt.generate_refresh_token(&user.id).unwrap();

    let (status, _) = app
        .request(Method::GET, "/api/v1/notifications/read", Some(&refresh))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn read_notifications_list_only_the_users_read_ones() {
    let app = TestApp::new();
    let owner = app.store.add_user(false);
    let business = app.store.add_business(&owner);
    let dev_user = app.store.add_user(false);
    let developer = app.store.add_developer(&dev_user);
    let conversation = app.store.add_conversation(&developer, &business);

    let read = app.store.notify(&owner, &conversation, Some(Utc::now() - Duration::hours(1)));
    let unread = app.store.notify(&owner, &conversation, None);
    let someone_elses = app.store.notify(&dev_user, &conversation, Some(Utc::now()));

    let (status, body) = app.get("/api/v1/notifications/read", &owner).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("error").is_none());

    let listed = ids(&body);
    assert_eq!(listed, vec![read.id.to_string()]);
    assert!(!listed.contains(&unread.id.to_string()));
    assert!(!listed.contains(&someone_elses.id.to_string()));
}

#[tokio::test]
async fn read_notifications_paginate_newest_first() {
    let app = TestApp::new();
    let owner = app.store.add_user(false);
    let business = app.store.add_business(&owner);
    let dev_user = app.store.add_user(false);
    let developer = app.store.add_developer(&dev_user);
    let conversation = app.store.add_conversation(&developer, &business);

    let now = Utc::now();
    let older = app
        .store
        .notify_at(&owner, &conversation, now - Duration::days(2), Some(now - Duration::days(1)));
    let newer = app
        .store
        .notify_at(&owner, &conversation, now - Duration::hours(2), Some(now - Duration::hours(1)));

    let (status, first) = app.get("/api/v1/notifications/read?per_page=1", &owner).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&first), vec![newer.id.to_string()]);

    let (status, second) = app.get("/api/v1/notifications/read?per_page=1&page=2", &owner).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&second), vec![older.id.to_string()]);
    assert_eq!(second["data"]["page"], 2);
    assert_eq!(second["data"]["per_page"], 1);
}

#[tokio::test]
async fn token_for_deleted_user_is_unauthorized() {
    let app = TestApp::new();
    let token = app.jwt.generate_access_token(&Uuid::new_v4()).unwrap();

    let (status, body) = app
        .request(Method::GET, "/api/v1/notifications/read", Some(&token))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn bearer_scheme_is_case_insensitive() {
    let app = TestApp::new();
    let user = app.store.add_user(false);
    let header = format!("bearer {}", app.token_for(&user));

    let (status, _) = app
        .request_with_authorization(Method::GET, "/api/v1/notifications/read", Some(&header))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unread_notifications_listed_on_index() {
    let app = TestApp::new();
    let owner = app.store.add_user(false);
    let business = app.store.add_business(&owner);
    let dev_user = app.store.add_user(false);
    let developer = app.store.add_developer(&dev_user);
    let conversation = app.store.add_conversation(&developer, &business);

    app.store.notify(&owner, &conversation, Some(Utc::now()));
    let unread = app.store.notify(&owner, &conversation, None);

    let (status, body) = app.get("/api/v1/notifications", &owner).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![unread.id.to_string()]);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["per_page"], 20);
}

#[tokio::test]
async fn invalid_page_size_is_a_bad_request() {
    let app = TestApp::new();
    let user = app.store.add_user(false);

    let (status, body) = app.get("/api/v1/notifications/read?per_page=500", &user).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_page_query_uses_error_envelope() {
    let app = TestApp::new();
    let user = app.store.add_user(false);

    for uri in [
        "/api/v1/notifications/read?per_page=abc",
        "/api/v1/notifications?page=-1",
    ] {
        let (status, body) = app.get(uri, &user).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{}", uri);
        assert!(body.get("data").is_none(), "{}", uri);
    }
}

#[tokio::test]
async fn marking_read_moves_notification_between_listings() {
    let app = TestApp::new();
    let owner = app.store.add_user(false);
    let business = app.store.add_business(&owner);
    let dev_user = app.store.add_user(false);
    let developer = app.store.add_developer(&dev_user);
    let conversation = app.store.add_conversation(&developer, &business);
    let notification = app.store.notify(&owner, &conversation, None);

    let token = app.token_for(&owner);
    let uri = format!("/api/v1/notifications/{}/read", notification.id);
    let (status, body) = app.request(Method::POST, &uri, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["data"]["read_at"].is_null());

    let (_, unread) = app.get("/api/v1/notifications", &owner).await;
    assert!(ids(&unread).is_empty());
    let (_, read) = app.get("/api/v1/notifications/read", &owner).await;
    assert_eq!(ids(&read), vec![notification.id.to_string()]);
}

#[tokio::test]
async fn marking_another_users_notification_is_not_found() {
    let app = TestApp::new();
    let owner = app.store.add_user(false);
    let business = app.store.add_business(&owner);
    let dev_user = app.store.add_user(false);
    let developer = app.store.add_developer(&dev_user);
    let conversation = app.store.add_conversation(&developer, &business);
    let notification = app.store.notify(&owner, &conversation, None);

    let token = app.token_for(&dev_user);
    let uri = format!("/api/v1/notifications/{}/read", notification.id);
    let (status, _) = app.request(Method::POST, &uri, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, unread) = app.get("/api/v1/notifications", &owner).await;
    assert_eq!(ids(&unread), vec![notification.id.to_string()]);
}
