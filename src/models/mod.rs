pub mod alert;
pub mod budget;
pub mod category;
pub mod debt;
pub mod transaction;
pub mod user;

pub use alert::Alert;
pub use budget::Budget;
pub use category::{Category, ExpenseCategory, IncomeCategory, TransactionKind};
pub use debt::{Debt, DebtKind, DebtStatus};
pub use transaction::Transaction;
pub use user::{CurrentUser, User};
