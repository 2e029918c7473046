use axum::{routing::{get, put}, Router};
use crate::{controllers::user_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/users", get(user_controller::get_current_user))
        .route("/api/users/profile", put(user_controller::put_profile))
}
