use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{models::CurrentUser, services::alerts_service, AppState};

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "msg": "Not authorized" })),
    )
        .into_response()
}

// GET /api/alerts — unread alerts, newest first
pub async fn get_alerts(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    match alerts_service::list_unread_alerts(&state, u.id).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": format!("db error: {e}") })),
        )
            .into_response(),
    }
}

// PUT /api/alerts/read — bulk mark-all-read
pub async fn put_mark_all_read(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    match alerts_service::mark_all_read(&state, u.id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "msg": "Alerts marked as read" })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": format!("db error: {e}") })),
        )
            .into_response(),
    }
}
