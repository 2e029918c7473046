use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtKind {
    // "lent" = I gave money, "borrowed" = I took money
    #[serde(rename = "lent")]
    Lent,
    #[serde(rename = "borrowed")]
    Borrowed,
}

impl DebtKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lent" => Some(Self::Lent),
            "borrowed" => Some(Self::Borrowed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "paid")]
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub user_id: ObjectId,
    pub kind: DebtKind,
    pub person: String,

    #[serde(default)]
    pub description: String,

    pub amount: f64,

    pub due_date: Option<i64>,
    pub status: DebtStatus,

    pub created_at: i64,
    pub updated_at: i64,
}
