use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::CurrentUser,
    services::debt_service::{self, DebtUpdate, DeleteOutcome},
    AppState,
};

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "msg": "User not authorized" })),
    )
        .into_response()
}

fn server_error(e: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "msg": format!("db error: {e}") })),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "msg": "Debt record not found" })),
    )
        .into_response()
}

// GET /api/debts
pub async fn get_debts(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    match debt_service::list_debts(&state, u.id).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => server_error(e),
    }
}

#[derive(Deserialize)]
pub struct AddDebtPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub person: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    #[serde(default, rename = "dueDate")]
    pub due_date: Option<String>,
}

// POST /api/debts
pub async fn post_debt(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(payload): Json<AddDebtPayload>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    match debt_service::add_debt(
        &state,
        u.id,
        &payload.kind,
        &payload.person,
        &payload.description,
        payload.amount,
        payload.due_date.as_deref(),
    )
    .await
    {
        Ok(debt) => (StatusCode::CREATED, Json(debt)).into_response(),
        Err(errs) => {
            if let Some(v) = errs.get("_form") {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "msg": v })),
                )
                    .into_response();
            }
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "msg": "Invalid debt record.", "errors": errs })),
            )
                .into_response()
        }
    }
}

// PUT /api/debts/:id — toggle pending/paid
pub async fn put_debt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    let oid = match ObjectId::parse_str(&id) {
        Ok(x) => x,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "msg": "Invalid debt id" })),
            )
                .into_response();
        }
    };

    match debt_service::toggle_debt_status(&state, u.id, oid).await {
        Ok(DebtUpdate::Updated(debt)) => (StatusCode::OK, Json(debt)).into_response(),
        Ok(DebtUpdate::NotFound) => not_found(),
        Ok(DebtUpdate::NotOwned) => unauthorized(),
        Err(e) => server_error(e),
    }
}

// DELETE /api/debts/:id
pub async fn delete_debt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    let oid = match ObjectId::parse_str(&id) {
        Ok(x) => x,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "msg": "Invalid debt id" })),
            )
                .into_response();
        }
    };

    match debt_service::delete_debt(&state, u.id, oid).await {
        Ok(DeleteOutcome::Removed) => (
            StatusCode::OK,
            Json(json!({ "msg": "Debt record removed" })),
        )
            .into_response(),
        Ok(DeleteOutcome::NotFound) => not_found(),
        Ok(DeleteOutcome::NotOwned) => unauthorized(),
        Err(e) => server_error(e),
    }
}
