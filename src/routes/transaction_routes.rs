use axum::{routing::{delete, get}, Router};
use crate::{controllers::transactions_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/transactions",
            get(transactions_controller::get_transactions)
                .post(transactions_controller::post_transaction),
        )
        .route(
            "/api/transactions/:id",
            delete(transactions_controller::delete_transaction),
        )
}
