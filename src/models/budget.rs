use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;

/// Monthly spending ceiling for one expense category. At most one document
/// per (user_id, category, month) — enforced by a unique index; writes for an
/// existing triple upsert the amount in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub user_id: ObjectId,
    pub category: ExpenseCategory,

    // "YYYY-MM"
    pub month: String,

    pub amount: f64,
}
