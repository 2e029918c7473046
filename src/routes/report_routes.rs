use axum::{routing::get, Router};
use crate::{controllers::reports_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(
        "/api/reports/monthly",
        get(reports_controller::get_monthly_expenses),
    )
}
