use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use watchlist::api::params::ResolvedPath;
use watchlist::config::Config;
use watchlist::domain::Genre;

async fn spawn_app() -> Router {
    let db_path =
        std::env::temp_dir().join(format!("watchlist-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = watchlist::api::create_app_state(config, None)
        .await
        .expect("Failed to create app state");
    state.store.reseed().await.expect("Failed to seed database");

    watchlist::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(app, "GET", uri, None).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn text(body: &[u8]) -> &str {
    std::str::from_utf8(body).unwrap()
}

fn ids(shows: &Value) -> Vec<i64> {
    shows
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_and_get_shows() {
    let app = spawn_app().await;

    let (status, shows) = get_json(&app, "/shows").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&shows), (1..=10).collect::<Vec<_>>());

    let (status, show) = get_json(&app, "/shows/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        show,
        json!({
            "id": 2,
            "title": "Breaking Bad",
            "genre": "Drama",
            "rating": 10,
            "status": "completed"
        })
    );

    let (_, show) = get_json(&app, "/shows/9").await;
    assert!(show["rating"].is_null());
}

#[tokio::test]
async fn test_show_id_validation() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/shows/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Show Not Found");

    let (status, body) = send(&app, "GET", "/shows/foo", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text(&body), "Show id must be a valid integer.");

    let (status, _) = send(&app, "GET", "/shows/99999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/shows/99999999999999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Show Not Found");

    let (status, body) = send(&app, "PATCH", "/users/1/shows/99999999999999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Show Not Found");

    let (status, _) = send(&app, "GET", "/users/1e2", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "DELETE", "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text(&body), "User id must be a valid integer.");
}

#[tokio::test]
async fn test_update_show_rating() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "PATCH", "/shows/1", Some(json!({ "rating": 11 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(errors[0]["msg"], "new rating must be 0-10 (inclusive)");
    assert_eq!(errors[0]["path"], "rating");
    assert_eq!(errors[0]["location"], "body");

    let (status, body) = send(&app, "PATCH", "/shows/1", Some(json!({ "rating": 8 }))).await;
    assert_eq!(status, StatusCode::OK);
    let changed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(changed, json!({ "rating": 8 }));

    let (_, show) = get_json(&app, "/shows/1").await;
    assert_eq!(show["rating"], 8);
    assert_eq!(show["status"], "completed");
}

#[tokio::test]
async fn test_update_show_aggregates_errors() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/shows/3",
        Some(json!({ "rating": "abc", "status": "on hold" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors: Value = serde_json::from_slice(&body).unwrap();
    let msgs: Vec<&str> = errors
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["msg"].as_str().unwrap())
        .collect();
    assert_eq!(
        msgs,
        vec![
            "new rating must be an integer",
            "new status must not contain spaces"
        ]
    );

    let (_, show) = get_json(&app, "/shows/3").await;
    assert_eq!(show["rating"], 7);
}

#[tokio::test]
async fn test_update_show_status_and_empty_body() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/shows/9",
        Some(json!({ "rating": "6", "status": "renewed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let changed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(changed, json!({ "rating": 6, "status": "renewed" }));

    let (status, body) = send(&app, "PATCH", "/shows/9", None).await;
    assert_eq!(status, StatusCode::OK);
    let changed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(changed, json!({}));

    let (status, body) = send(&app, "PATCH", "/shows/9", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text(&body), "Request body must be a JSON object.");

    let (_, show) = get_json(&app, "/shows/9").await;
    assert_eq!(show["rating"], 6);
    assert_eq!(show["status"], "renewed");
}

#[tokio::test]
async fn test_genres() {
    let app = spawn_app().await;

    let (status, genres) = get_json(&app, "/shows/genres").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(genres, json!(["Comedy", "Drama", "Horror", "Sitcom"]));

    let (status, comedy) = get_json(&app, "/shows/genres/Comedy").await;
    assert_eq!(status, StatusCode::OK);
    let (_, shouted) = get_json(&app, "/shows/genres/COMEDY").await;
    assert_eq!(comedy, shouted);
    assert_eq!(ids(&comedy), vec![1, 6]);

    let (_, drama) = get_json(&app, "/shows/genres/drama").await;
    assert_eq!(ids(&drama), vec![2, 5, 9, 10]);

    let (status, body) = send(&app, "GET", "/shows/genres/Western", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Genre Not Found");
}

#[tokio::test]
async fn test_users() {
    let app = spawn_app().await;

    let (status, users) = get_json(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 4);

    let (status, user) = get_json(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "g.lucas@example.com");
    assert_eq!(user["password"], "password123");

    let (status, body) = send(&app, "GET", "/users/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "User Not Found");
}

#[tokio::test]
async fn test_add_show_to_user_is_idempotent() {
    let app = spawn_app().await;

    let (status, shows) = get_json(&app, "/users/4/shows").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shows, json!([]));

    let (status, body) = send(&app, "PATCH", "/users/4/shows/5", None).await;
    assert_eq!(status, StatusCode::OK);
    let show: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(show["title"], "Succession");

    let (status, _) = send(&app, "PATCH", "/users/4/shows/5", None).await;
    assert_eq!(status, StatusCode::OK);

    send(&app, "PATCH", "/users/4/shows/1", None).await;

    let (_, shows) = get_json(&app, "/users/4/shows").await;
    assert_eq!(ids(&shows), vec![1, 5]);
}

#[tokio::test]
async fn test_add_show_to_user_checks_both_ids() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "PATCH", "/users/99/shows/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "User Not Found");

    let (status, body) = send(&app, "PATCH", "/users/1/shows/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Show Not Found");

    let (status, body) = send(&app, "PATCH", "/users/x/shows/y", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text(&body), "User id must be a valid integer.");
}

#[tokio::test]
async fn test_delete_user() {
    let app = spawn_app().await;

    send(&app, "PATCH", "/users/3/shows/2", None).await;

    let (status, body) = send(&app, "DELETE", "/users/3", None).await;
    assert_eq!(status, StatusCode::OK);
    let deleted: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(deleted["id"], 3);
    assert_eq!(deleted["username"], "c.ng@example.com");

    let (status, _) = send(&app, "GET", "/users/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, users) = get_json(&app, "/users").await;
    assert_eq!(users.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_show_removes_it_from_user_lists() {
    let app = spawn_app().await;

    send(&app, "PATCH", "/users/1/shows/7", None).await;
    send(&app, "PATCH", "/users/1/shows/8", None).await;
    send(&app, "PATCH", "/users/4/shows/7", None).await;

    let (status, body) = send(&app, "DELETE", "/shows/7", None).await;
    assert_eq!(status, StatusCode::OK);
    let deleted: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(deleted["title"], "Stranger Things");

    let (status, _) = send(&app, "GET", "/shows/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, shows) = get_json(&app, "/users/1/shows").await;
    assert_eq!(ids(&shows), vec![1, 2, 4, 8, 10]);
    let (_, shows) = get_json(&app, "/users/4/shows").await;
    assert_eq!(shows, json!([]));
}

#[tokio::test]
async fn test_seed_resets_data() {
    let app = spawn_app().await;

    send(&app, "DELETE", "/users/1", None).await;
    send(&app, "PATCH", "/shows/4", Some(json!({ "rating": 0 }))).await;
    send(&app, "PATCH", "/users/3/shows/4", None).await;
    send(&app, "DELETE", "/shows/10", None).await;

    let (status, summary) = get_json(&app, "/seed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary, json!({ "shows": 10, "users": 4, "user_shows": 8 }));

    let (status, _) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, show) = get_json(&app, "/shows/4").await;
    assert_eq!(show["rating"], 6);
    let (_, shows) = get_json(&app, "/users/1/shows").await;
    assert_eq!(ids(&shows), vec![1, 2, 4, 10]);
    let (_, shows) = get_json(&app, "/users/3/shows").await;
    assert_eq!(shows, json!([]));
}

#[tokio::test]
async fn test_seeded_user_lists() {
    let app = spawn_app().await;

    let (_, shows) = get_json(&app, "/users/1/shows").await;
    assert_eq!(ids(&shows), vec![1, 2, 4, 10]);
    let (_, shows) = get_json(&app, "/users/2/shows").await;
    assert_eq!(ids(&shows), vec![3, 4, 8, 9]);
    let (_, shows) = get_json(&app, "/users/4/shows").await;
    assert_eq!(shows, json!([]));

    let (status, _) = send(&app, "PATCH", "/users/2/shows/4", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, shows) = get_json(&app, "/users/2/shows").await;
    assert_eq!(ids(&shows), vec![3, 4, 8, 9]);
}

#[tokio::test]
async fn test_resolved_path_is_noted_on_response() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/users/2/shows/5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.extensions().get::<ResolvedPath>(),
        Some(&ResolvedPath {
            show_id: Some(5),
            user_id: Some(2),
            genre: None,
        })
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/shows/genres/HORROR")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let resolved = response.extensions().get::<ResolvedPath>().copied().unwrap();
    assert_eq!(resolved.genre, Some(Genre::Horror));
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let app = spawn_app().await;

    let (status, _) = send(&app, "GET", "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
}
