use axum::{
    http::{header, Request, StatusCode},
    routing::post,
    Router,
};
use http_body_util::BodyExt;
use mongodb::Client;
use rustledger::{config, controllers::auth_controller, AppState};
use tower::ServiceExt;

async fn test_state() -> AppState {
    let settings = config::load();

    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("mongodb client");
    let db = client.database(&settings.mongodb_db);

    AppState { db, settings }
}

async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

#[tokio::test]
async fn register_missing_name_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/users/register", post(auth_controller::post_register))
        .with_state(state);

    let req = Request::builder()
        .method("POST")
        .uri("/api/users/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"name":"  ","email":"a@b.com","password":"secret1"}"#,
        ))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Name is required"));
}

#[tokio::test]
async fn register_invalid_email_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/users/register", post(auth_controller::post_register))
        .with_state(state);

    let req = Request::builder()
        .method("POST")
        .uri("/api/users/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"name":"Test","email":"not-an-email","password":"secret1"}"#,
        ))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("valid email"));
}

#[tokio::test]
async fn register_short_password_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/users/register", post(auth_controller::post_register))
        .with_state(state);

    let req = Request::builder()
        .method("POST")
        .uri("/api/users/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"name":"Test","email":"a@b.com","password":"abc"}"#,
        ))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("6 or more characters"));
}

#[tokio::test]
async fn login_empty_credentials_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/users/login", post(auth_controller::post_login))
        .with_state(state);

    let req = Request::builder()
        .method("POST")
        .uri("/api/users/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(r#"{"email":"","password":""}"#))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Invalid Credentials"));
}
