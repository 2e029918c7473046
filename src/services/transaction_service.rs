use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;

use crate::{
    models::{Alert, Category, Transaction, TransactionKind},
    months,
    services::budget_alerts,
    AppState,
};

use super::auth_service::FieldErrors;

#[derive(Debug, Clone)]
pub struct AddTransactionResult {
    pub transaction: Transaction,
    pub new_alert: Option<Alert>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
    NotOwned,
}

/// The ingestion flow. Validates and persists the transaction; the insert
/// must succeed or the whole call fails. For expenses, the budget check runs
/// afterwards as best effort: the transaction is committed at that point, so
/// any alerting failure is logged and reduced to "no alert" instead of
/// rolling anything back.
pub async fn add_transaction(
    state: &AppState,
    user_id: ObjectId,
    description: &str,
    amount: f64,
    kind_raw: &str,
    category_raw: &str,
    date_raw: Option<&str>,
) -> Result<AddTransactionResult, FieldErrors> {
    let mut errs: FieldErrors = HashMap::new();

    let description = description.trim();
    if description.is_empty() {
        errs.insert("description".into(), "Description is required.".into());
    } else if description.chars().count() > 50 {
        errs.insert(
            "description".into(),
            "Description must be 50 characters or fewer.".into(),
        );
    }

    if !amount.is_finite() || amount <= 0.0 {
        errs.insert("amount".into(), "Enter a valid positive amount.".into());
    }

    let kind = TransactionKind::parse(kind_raw);
    if kind.is_none() {
        errs.insert("type".into(), "Type must be income or expense.".into());
    }

    let category = kind.and_then(|k| Category::parse_for_kind(k, category_raw));
    if kind.is_some() && category.is_none() {
        errs.insert(
            "category".into(),
            format!("Unknown {kind_raw} category."),
        );
    }

    let date = match date_raw {
        Some(s) => match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
            Ok(d) => d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp()),
            Err(_) => {
                errs.insert("date".into(), "Date must be YYYY-MM-DD.".into());
                None
            }
        },
        None => Some(Utc::now().timestamp()),
    };

    if !errs.is_empty() {
        return Err(errs);
    }
    let (Some(kind), Some(category), Some(date)) = (kind, category, date) else {
        return Err(errs);
    };

    let tx = Transaction {
        id: ObjectId::new(),
        user_id,
        description: description.to_string(),
        amount,
        kind,
        category,
        date,
    };

    let transactions = state.db.collection::<Transaction>("transactions");
    if let Err(e) = transactions.insert_one(&tx, None).await {
        let mut errs = FieldErrors::new();
        errs.insert("_form".into(), format!("db error: {e}"));
        return Err(errs);
    }

    let mut new_alert = None;
    if let Category::Expense(cat) = tx.category {
        match months::key_for_timestamp(tx.date) {
            Some(month) => {
                match budget_alerts::check_new_expense(state, user_id, cat, &month, tx.amount)
                    .await
                {
                    Ok(found) => new_alert = found,
                    Err(e) => {
                        tracing::warn!(
                            "budget alert check failed for {}/{}: {}",
                            cat.as_str(),
                            month,
                            e
                        );
                    }
                }
            }
            None => {
                tracing::warn!("transaction date {} outside calendar range", tx.date);
            }
        }
    }

    Ok(AddTransactionResult {
        transaction: tx,
        new_alert,
    })
}

pub async fn list_transactions(
    state: &AppState,
    user_id: ObjectId,
) -> Result<Vec<Transaction>, String> {
    let transactions = state.db.collection::<Transaction>("transactions");

    let find_opts = FindOptions::builder().sort(doc! { "date": -1 }).build();

    let mut cursor = transactions
        .find(doc! { "user_id": user_id }, find_opts)
        .await
        .map_err(|e| e.to_string())?;

    let mut items: Vec<Transaction> = Vec::new();
    while let Some(res) = cursor.next().await {
        items.push(res.map_err(|e| e.to_string())?);
    }

    Ok(items)
}

pub async fn delete_transaction(
    state: &AppState,
    user_id: ObjectId,
    id: ObjectId,
) -> Result<DeleteOutcome, String> {
    let transactions = state.db.collection::<Transaction>("transactions");

    let tx = transactions
        .find_one(doc! { "_id": id }, None)
        .await
        .map_err(|e| e.to_string())?;

    let Some(tx) = tx else {
        return Ok(DeleteOutcome::NotFound);
    };

    if tx.user_id != user_id {
        return Ok(DeleteOutcome::NotOwned);
    }

    transactions
        .delete_one(doc! { "_id": id }, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(DeleteOutcome::Removed)
}
