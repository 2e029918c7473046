use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;

/// One-time budget-threshold notification. At most one document per
/// (user_id, category, month, threshold) — the unique index is what makes
/// concurrent ingestion safe, see `alerts_service::insert_alert_if_absent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub user_id: ObjectId,
    pub message: String,

    pub category: ExpenseCategory,

    // "YYYY-MM"
    pub month: String,

    // 50 | 90 | 100
    pub threshold: i64,

    pub is_read: bool,
    pub created_at: i64,
}
