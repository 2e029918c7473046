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
    services::transaction_service::{self, DeleteOutcome},
    AppState,
};

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "msg": "Not authorized" })),
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

// GET /api/transactions
pub async fn get_transactions(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    match transaction_service::list_transactions(&state, u.id).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => server_error(e),
    }
}

#[derive(Deserialize)]
pub struct AddTransactionPayload {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    #[serde(default)]
    pub date: Option<String>,
}

// POST /api/transactions
pub async fn post_transaction(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(payload): Json<AddTransactionPayload>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    let result = match transaction_service::add_transaction(
        &state,
        u.id,
        &payload.description,
        payload.amount,
        &payload.kind,
        &payload.category,
        payload.date.as_deref(),
    )
    .await
    {
        Ok(r) => r,
        Err(errs) => {
            if let Some(v) = errs.get("_form") {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "msg": v })),
                )
                    .into_response();
            }
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "msg": "Invalid transaction.", "errors": errs })),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "transaction": result.transaction,
            "newAlert": result.new_alert,
        })),
    )
        .into_response()
}

// DELETE /api/transactions/:id
pub async fn delete_transaction(
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
                Json(json!({ "msg": "Invalid transaction id" })),
            )
                .into_response();
        }
    };

    match transaction_service::delete_transaction(&state, u.id, oid).await {
        Ok(DeleteOutcome::Removed) => (
            StatusCode::OK,
            Json(json!({ "msg": "Transaction removed" })),
        )
            .into_response(),
        Ok(DeleteOutcome::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "Transaction not found" })),
        )
            .into_response(),
        Ok(DeleteOutcome::NotOwned) => unauthorized(),
        Err(e) => server_error(e),
    }
}
