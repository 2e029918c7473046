pub mod alerts_controller;
pub mod auth_controller;
pub mod budgets_controller;
pub mod debts_controller;
pub mod home_controller;
pub mod insights_controller;
pub mod reports_controller;
pub mod transactions_controller;
pub mod user_controller;
