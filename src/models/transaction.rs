use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::category::{Category, TransactionKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub user_id: ObjectId,
    pub description: String,
    pub amount: f64,

    pub kind: TransactionKind,
    pub category: Category,

    // occurrence date, unix seconds (UTC)
    pub date: i64,
}
