use axum::{routing::{get, put}, Router};
use crate::{controllers::alerts_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/alerts", get(alerts_controller::get_alerts))
        .route("/api/alerts/read", put(alerts_controller::put_mark_all_read))
}
