pub mod db_init;

pub mod alerts_service;
pub mod auth_service;
pub mod budget_alerts;
pub mod budget_service;
pub mod debt_service;
pub mod insights_service;
pub mod report_service;
pub mod spending_service;
pub mod transaction_service;
pub mod user_service;
