use std::collections::HashMap;

use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde::Serialize;

use crate::{models::ExpenseCategory, months, AppState};

/// Fallback monthly averages for users without enough history of their own.
const DEFAULT_AVERAGES: [(ExpenseCategory, f64); 5] = [
    (ExpenseCategory::Food, 3000.0),
    (ExpenseCategory::Transport, 1500.0),
    (ExpenseCategory::Utilities, 15000.0),
    (ExpenseCategory::Shopping, 1000.0),
    (ExpenseCategory::Entertainment, 1000.0),
];

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

fn bson_to_f64(v: Option<&Bson>) -> f64 {
    match v {
        Some(Bson::Double(x)) => *x,
        Some(Bson::Int32(x)) => *x as f64,
        Some(Bson::Int64(x)) => *x as f64,
        _ => 0.0,
    }
}

async fn drain(
    mut cursor: mongodb::Cursor<Document>,
) -> Result<Vec<Document>, String> {
    let mut docs = Vec::new();
    while let Some(res) = cursor.next().await {
        docs.push(res.map_err(|e| e.to_string())?);
    }
    Ok(docs)
}

/// Top-category and spending-vs-average insights for one month.
pub async fn get_insights(
    state: &AppState,
    user_id: ObjectId,
    month: &str,
) -> Result<Vec<Insight>, String> {
    let (start, end) =
        months::bounds(month).ok_or_else(|| format!("invalid month key: {month}"))?;

    let transactions = state.db.collection::<Document>("transactions");
    let mut insights: Vec<Insight> = Vec::new();

    // top spending category this month
    let top_pipeline = vec![
        doc! { "$match": {
            "user_id": user_id,
            "kind": "expense",
            "date": { "$gte": start, "$lt": end },
        }},
        doc! { "$group": { "_id": "$category", "totalSpent": { "$sum": "$amount" } } },
        doc! { "$sort": { "totalSpent": -1 } },
        doc! { "$limit": 1 },
    ];

    let top = drain(
        transactions
            .aggregate(top_pipeline, None)
            .await
            .map_err(|e| e.to_string())?,
    )
    .await?;

    if let Some(first) = top.first() {
        let category = first.get_str("_id").unwrap_or_default();
        let month_name = months::display_name(month).unwrap_or_else(|| month.to_string());
        insights.push(Insight {
            kind: "info",
            message: format!(
                "Your top spending category for {month_name} was **{category}**."
            ),
        });
    }

    // personal six-month average per category, excluding the target month
    let six_ago = months::key_minus_months(month, 6)
        .ok_or_else(|| format!("invalid month key: {month}"))?;
    let (hist_start, _) =
        months::bounds(&six_ago).ok_or_else(|| format!("invalid month key: {six_ago}"))?;

    // dates are unix seconds, so $month needs the $toDate(ms) bridge
    let avg_pipeline = vec![
        doc! { "$match": {
            "user_id": user_id,
            "kind": "expense",
            "date": { "$gte": hist_start, "$lt": start },
        }},
        doc! { "$group": {
            "_id": {
                "category": "$category",
                "month": { "$month": { "$toDate": { "$multiply": ["$date", 1000] } } },
            },
            "monthlyTotal": { "$sum": "$amount" },
        }},
        doc! { "$group": {
            "_id": "$_id.category",
            "avgMonthly": { "$avg": "$monthlyTotal" },
        }},
    ];

    let averages = drain(
        transactions
            .aggregate(avg_pipeline, None)
            .await
            .map_err(|e| e.to_string())?,
    )
    .await?;

    let mut average_map: HashMap<String, f64> = HashMap::new();
    for d in &averages {
        if let Ok(cat) = d.get_str("_id") {
            average_map.insert(cat.to_string(), bson_to_f64(d.get("avgMonthly")));
        }
    }

    // this month's totals per category
    let current_pipeline = vec![
        doc! { "$match": {
            "user_id": user_id,
            "kind": "expense",
            "date": { "$gte": start, "$lt": end },
        }},
        doc! { "$group": { "_id": "$category", "totalSpent": { "$sum": "$amount" } } },
    ];

    let current = drain(
        transactions
            .aggregate(current_pipeline, None)
            .await
            .map_err(|e| e.to_string())?,
    )
    .await?;

    for d in &current {
        let Ok(category) = d.get_str("_id") else {
            continue;
        };
        let spent = bson_to_f64(d.get("totalSpent"));

        let avg = average_map.get(category).copied().or_else(|| {
            DEFAULT_AVERAGES
                .iter()
                .find(|(c, _)| c.as_str() == category)
                .map(|(_, v)| *v)
        });

        let Some(avg) = avg else {
            continue;
        };

        if avg > 0.0 && spent > avg * 1.2 {
            let percent_increase = (spent - avg) / avg * 100.0;
            if percent_increase > 25.0 {
                insights.push(Insight {
                    kind: "warning",
                    message: format!(
                        "Heads up! Your spending on **{category}** is **{percent_increase:.0}% higher** than your average."
                    ),
                });
            }
        }
    }

    Ok(insights)
}
