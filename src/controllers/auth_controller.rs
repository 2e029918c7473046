use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::{services::auth_service, AppState};

const TOKEN_DAYS: i64 = 7;

fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(email)
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "msg": msg }))).into_response()
}

fn server_error(msg: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "msg": msg })),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

// POST /api/users/register
pub async fn post_register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Response {
    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_lowercase();
    let password = payload.password;

    if name.is_empty() {
        return bad_request("Name is required");
    }
    if !is_valid_email(&email) {
        return bad_request("Please include a valid email");
    }
    if password.chars().count() < 6 {
        return bad_request("Please enter a password with 6 or more characters");
    }

    let user_id = match auth_service::register_user(&state, &name, &email, &password).await {
        Ok(id) => id,
        Err(errs) => {
            if let Some(v) = errs.get("email") {
                return bad_request(v);
            }
            let msg = errs
                .get("_form")
                .map(String::as_str)
                .unwrap_or("There is a problem registering this user!");
            return server_error(msg);
        }
    };

    match auth_service::make_jwt_with_days(&state, &user_id, TOKEN_DAYS) {
        Ok(token) => (StatusCode::OK, Json(json!({ "token": token }))).into_response(),
        Err(e) => server_error(&format!("token error: {e}")),
    }
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

// POST /api/users/login
pub async fn post_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Response {
    let email = payload.email.trim().to_lowercase();
    let password = payload.password;

    if email.is_empty() || password.is_empty() {
        return bad_request("Invalid Credentials");
    }

    let user = match auth_service::login_user(&state, &email, &password).await {
        Ok(u) => u,
        Err(errs) => {
            let msg = errs
                .get("_form")
                .map(String::as_str)
                .unwrap_or("Invalid Credentials");
            return bad_request(msg);
        }
    };

    match auth_service::make_jwt_with_days(&state, &user.id, TOKEN_DAYS) {
        Ok(token) => (StatusCode::OK, Json(json!({ "token": token }))).into_response(),
        Err(e) => server_error(&format!("token error: {e}")),
    }
}
