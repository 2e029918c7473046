use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::{controllers::home_controller, AppState};

pub mod alert_routes;
pub mod auth_routes;
pub mod budget_routes;
pub mod debt_routes;
pub mod home_routes;
pub mod insights_routes;
pub mod report_routes;
pub mod transaction_routes;
pub mod user_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = auth_routes::add_routes(router);
    let router = user_routes::add_routes(router);
    let router = transaction_routes::add_routes(router);
    let router = budget_routes::add_routes(router);
    let router = alert_routes::add_routes(router);
    let router = debt_routes::add_routes(router);
    let router = insights_routes::add_routes(router);
    let router = report_routes::add_routes(router);

    // CORS must sit outside the auth layers so preflight requests are
    // answered before require_auth can reject them.
    router
        .fallback(home_controller::not_found)
        .layer(from_fn_with_state(state.clone(), crate::auth::require_auth))
        .layer(from_fn_with_state(state.clone(), crate::auth::inject_current_user))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
