use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::{CurrentUser, User},
    services::user_service,
    AppState,
};

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "msg": "Not authorized" })),
    )
        .into_response()
}

fn user_json(u: &User) -> serde_json::Value {
    // never expose the password hash
    json!({
        "_id": u.id.to_hex(),
        "name": u.name,
        "email": u.email,
        "avatarUrl": u.avatar_url,
        "createdAt": u.created_at,
    })
}

// GET /api/users — the authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    match user_service::get_user(&state, u.id).await {
        Ok(Some(full)) => (StatusCode::OK, Json(user_json(&full))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "User not found" })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": format!("db error: {e}") })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
pub struct UpdateProfilePayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

// PUT /api/users/profile
pub async fn put_profile(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Response {
    let Some(Extension(u)) = user else {
        return unauthorized();
    };

    match user_service::update_profile(
        &state,
        u.id,
        payload.name.as_deref(),
        payload.avatar_url.as_deref(),
    )
    .await
    {
        Ok(updated) => (StatusCode::OK, Json(user_json(&updated))).into_response(),
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
                Json(json!({ "msg": "Invalid profile update.", "errors": errs })),
            )
                .into_response()
        }
    }
}
