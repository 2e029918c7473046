use axum::{routing::post, Router};
use crate::{controllers::auth_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/users/register", post(auth_controller::post_register))
        .route("/api/users/login", post(auth_controller::post_login))
}
