use axum::{routing::{delete, get, put}, Router};
use crate::{controllers::debts_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/debts",
            get(debts_controller::get_debts).post(debts_controller::post_debt),
        )
        .route(
            "/api/debts/:id",
            put(debts_controller::put_debt).delete(debts_controller::delete_debt),
        )
}
