use axum::{
    http::{header, Request, StatusCode},
    routing::{get, post},
    Router,
};
use http_body_util::BodyExt;
use mongodb::{bson::oid::ObjectId, Client};
use rustledger::models::CurrentUser;
use rustledger::{config, controllers::budgets_controller, AppState};
use tower::ServiceExt;

async fn test_state() -> AppState {
    let settings = config::load();

    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("mongodb client");
    let db = client.database(&settings.mongodb_db);

    AppState { db, settings }
}

fn test_user() -> CurrentUser {
    CurrentUser {
        id: ObjectId::new(),
        name: "test".to_string(),
        email: "test@example.com".to_string(),
    }
}

async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

#[tokio::test]
async fn post_budget_unauthorized_returns_401() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/budgets", post(budgets_controller::post_budget))
        .with_state(state);

    let req = Request::builder()
        .method("POST")
        .uri("/api/budgets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"category":"Food","amount":2000.0,"month":"2026-08"}"#,
        ))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn post_budget_zero_amount_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/budgets", post(budgets_controller::post_budget))
        .with_state(state);

    let mut req = Request::builder()
        .method("POST")
        .uri("/api/budgets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"category":"Food","amount":0.0,"month":"2026-08"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("valid, positive amount"));
}

#[tokio::test]
async fn post_budget_income_category_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/budgets", post(budgets_controller::post_budget))
        .with_state(state);

    // budgets only apply to expense categories
    let mut req = Request::builder()
        .method("POST")
        .uri("/api/budgets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"category":"Salary","amount":2000.0,"month":"2026-08"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Unknown expense category"));
}

#[tokio::test]
async fn post_budget_malformed_month_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/budgets", post(budgets_controller::post_budget))
        .with_state(state);

    let mut req = Request::builder()
        .method("POST")
        .uri("/api/budgets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"category":"Food","amount":2000.0,"month":"August 2026"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Month must be YYYY-MM"));
}

#[tokio::test]
async fn get_budgets_without_month_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/budgets", get(budgets_controller::get_budgets))
        .with_state(state);

    let mut req = Request::builder()
        .method("GET")
        .uri("/api/budgets")
        .body(axum::body::Body::empty())
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Month query parameter is required"));
}
