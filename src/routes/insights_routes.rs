use axum::{routing::get, Router};
use crate::{controllers::insights_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/api/insights", get(insights_controller::get_insights))
}
