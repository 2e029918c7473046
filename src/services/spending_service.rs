use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

use crate::{models::ExpenseCategory, months, AppState};

/// Total expense spending for (user, category, month), recomputed from the
/// transactions collection on every call — no cached running totals anywhere,
/// the query engine is the single source of truth. Returns 0.0 when nothing
/// matches; store errors propagate so callers can tell "no spending" from
/// "query failed".
pub async fn sum_expense_amount(
    state: &AppState,
    user_id: ObjectId,
    category: ExpenseCategory,
    month: &str,
) -> Result<f64, String> {
    let (start, end) =
        months::bounds(month).ok_or_else(|| format!("invalid month key: {month}"))?;

    let transactions = state.db.collection::<Document>("transactions");

    let pipeline = vec![
        doc! { "$match": {
            "user_id": user_id,
            "kind": "expense",
            "category": category.as_str(),
            "date": { "$gte": start, "$lt": end },
        }},
        doc! { "$group": { "_id": null, "total": { "$sum": "$amount" } } },
    ];

    let mut cursor = transactions
        .aggregate(pipeline, None)
        .await
        .map_err(|e| e.to_string())?;

    let mut total = 0.0;
    if let Some(res) = cursor.next().await {
        let d = res.map_err(|e| e.to_string())?;
        total = match d.get("total") {
            Some(Bson::Double(v)) => *v,
            Some(Bson::Int32(v)) => *v as f64,
            Some(Bson::Int64(v)) => *v as f64,
            _ => 0.0,
        };
    }

    Ok(total)
}
