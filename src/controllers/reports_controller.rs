use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{models::CurrentUser, services::report_service, AppState};

// GET /api/reports/monthly — current-year expenses grouped by month
pub async fn get_monthly_expenses(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "msg": "Not authorized" })),
        )
            .into_response();
    };

    match report_service::monthly_expenses(&state, u.id).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": format!("db error: {e}") })),
        )
            .into_response(),
    }
}
