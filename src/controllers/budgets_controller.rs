use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::{CurrentUser, ExpenseCategory},
    months,
    services::budget_service,
    AppState,
};

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "msg": "Not authorized" })),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct SetBudgetPayload {
    pub category: String,
    pub amount: f64,
    pub month: String,
}

// POST /api/budgets — upsert the ceiling for (category, month)
pub async fn post_budget(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(payload): Json<SetBudgetPayload>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    if !payload.amount.is_finite() || payload.amount <= 0.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "Please provide a valid, positive amount for the budget." })),
        )
            .into_response();
    }

    let Some(category) = ExpenseCategory::parse(payload.category.trim()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "Unknown expense category." })),
        )
            .into_response();
    };

    let month = payload.month.trim();
    if !months::is_valid_key(month) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "Month must be YYYY-MM." })),
        )
            .into_response();
    }

    match budget_service::set_budget(&state, u.id, category, month, payload.amount).await {
        Ok(budget) => (StatusCode::OK, Json(budget)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": format!("db error: {e}") })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
pub struct BudgetsQuery {
    #[serde(default)]
    pub month: Option<String>,
}

// GET /api/budgets?month=YYYY-MM
pub async fn get_budgets(
    State(state): State<AppState>,
    Query(query): Query<BudgetsQuery>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    let Some(month) = query.month.as_deref().map(str::trim) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "Month query parameter is required" })),
        )
            .into_response();
    };

    if !months::is_valid_key(month) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "Month must be YYYY-MM." })),
        )
            .into_response();
    }

    match budget_service::list_budgets(&state, u.id, month).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": format!("db error: {e}") })),
        )
            .into_response(),
    }
}
