use chrono::{Datelike, NaiveDate, Utc};
use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde::Serialize;

use crate::AppState;

/// One row of the year report: month number (1..12) and total expense amount.
/// Serialized with the month under `_id` to match the aggregation output the
/// chart client consumes.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyExpense {
    #[serde(rename = "_id")]
    pub month: i32,
    pub total: f64,
}

/// Current-year expense totals grouped by calendar month. Months with no
/// expenses are simply absent.
pub async fn monthly_expenses(
    state: &AppState,
    user_id: ObjectId,
) -> Result<Vec<MonthlyExpense>, String> {
    let year = Utc::now().year();

    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .ok_or_else(|| format!("invalid year: {year}"))?;
    let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .ok_or_else(|| format!("invalid year: {year}"))?;

    let transactions = state.db.collection::<Document>("transactions");

    let pipeline = vec![
        doc! { "$match": {
            "user_id": user_id,
            "kind": "expense",
            "date": { "$gte": start, "$lt": end },
        }},
        doc! { "$group": {
            "_id": { "$month": { "$toDate": { "$multiply": ["$date", 1000] } } },
            "total": { "$sum": "$amount" },
        }},
        doc! { "$sort": { "_id": 1 } },
    ];

    let mut cursor = transactions
        .aggregate(pipeline, None)
        .await
        .map_err(|e| e.to_string())?;

    let mut rows: Vec<MonthlyExpense> = Vec::new();
    while let Some(res) = cursor.next().await {
        let d = res.map_err(|e| e.to_string())?;
        let month = match d.get("_id") {
            Some(Bson::Int32(v)) => *v,
            Some(Bson::Int64(v)) => *v as i32,
            _ => continue,
        };
        let total = match d.get("total") {
            Some(Bson::Double(v)) => *v,
            Some(Bson::Int32(v)) => *v as f64,
            Some(Bson::Int64(v)) => *v as f64,
            _ => 0.0,
        };
        rows.push(MonthlyExpense { month, total });
    }

    Ok(rows)
}
