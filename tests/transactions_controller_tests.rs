use axum::{
    http::{header, Request, StatusCode},
    routing::{delete, post},
    Router,
};
use http_body_util::BodyExt;
use mongodb::{bson::oid::ObjectId, Client};
use rustledger::models::CurrentUser;
use rustledger::{config, controllers::transactions_controller, AppState};
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
async fn post_transaction_unauthorized_returns_401() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/transactions", post(transactions_controller::post_transaction))
        .with_state(state);

    let req = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"description":"Lunch","amount":120.0,"type":"expense","category":"Food"}"#,
        ))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = response_body_string(res).await;
    assert!(body.to_lowercase().contains("not authorized"));
}

#[tokio::test]
async fn post_transaction_negative_amount_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/transactions", post(transactions_controller::post_transaction))
        .with_state(state);

    let mut req = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"description":"Lunch","amount":-5.0,"type":"expense","category":"Food"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Enter a valid positive amount"));
}

#[tokio::test]
async fn post_transaction_unknown_category_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/transactions", post(transactions_controller::post_transaction))
        .with_state(state);

    let mut req = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"description":"Stocks","amount":100.0,"type":"expense","category":"Stocks"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Unknown expense category"));
}

#[tokio::test]
async fn post_transaction_income_category_rejected_for_expense() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/transactions", post(transactions_controller::post_transaction))
        .with_state(state);

    // "Salary" is an income category; an expense may not use it
    let mut req = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"description":"Pay","amount":100.0,"type":"expense","category":"Salary"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Unknown expense category"));
}

#[tokio::test]
async fn post_transaction_invalid_kind_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/transactions", post(transactions_controller::post_transaction))
        .with_state(state);

    let mut req = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"description":"Lunch","amount":120.0,"type":"transfer","category":"Food"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Type must be income or expense"));
}

#[tokio::test]
async fn post_transaction_empty_description_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/transactions", post(transactions_controller::post_transaction))
        .with_state(state);

    let mut req = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"description":"   ","amount":120.0,"type":"expense","category":"Food"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Description is required"));
}

#[tokio::test]
async fn post_transaction_malformed_date_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route("/api/transactions", post(transactions_controller::post_transaction))
        .with_state(state);

    let mut req = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            r#"{"description":"Lunch","amount":120.0,"type":"expense","category":"Food","date":"31-01-2026"}"#,
        ))
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Date must be YYYY-MM-DD"));
}

#[tokio::test]
async fn delete_transaction_bad_id_returns_400() {
    let state = test_state().await;
    let app = Router::new()
        .route(
            "/api/transactions/:id",
            delete(transactions_controller::delete_transaction),
        )
        .with_state(state);

    let mut req = Request::builder()
        .method("DELETE")
        .uri("/api/transactions/not-an-oid")
        .body(axum::body::Body::empty())
        .unwrap();

    req.extensions_mut().insert(test_user());

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_body_string(res).await;
    assert!(body.contains("Invalid transaction id"));
}
