use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::{models::CurrentUser, months, services::insights_service, AppState};

#[derive(Deserialize)]
pub struct InsightsQuery {
    #[serde(default)]
    pub month: Option<String>,
}

// GET /api/insights?month=YYYY-MM (defaults to the current month)
pub async fn get_insights(
    State(state): State<AppState>,
    Query(query): Query<InsightsQuery>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "msg": "Not authorized" })),
        )
            .into_response();
    };

    let month = match query.month.as_deref().map(str::trim) {
        Some(m) => {
            if !months::is_valid_key(m) {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "msg": "Month must be YYYY-MM." })),
                )
                    .into_response();
            }
            m.to_string()
        }
        None => match months::key_for_timestamp(Utc::now().timestamp()) {
            Some(m) => m,
            None => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "msg": "clock error" })),
                )
                    .into_response();
            }
        },
    };

    match insights_service::get_insights(&state, u.id, &month).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": format!("db error: {e}") })),
        )
            .into_response(),
    }
}
