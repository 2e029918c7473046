use axum::{routing::get, Router};
use crate::{controllers::budgets_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(
        "/api/budgets",
        get(budgets_controller::get_budgets).post(budgets_controller::post_budget),
    )
}
