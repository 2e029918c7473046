use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;

use crate::{
    models::{Debt, DebtKind, DebtStatus},
    AppState,
};

use super::auth_service::FieldErrors;

#[derive(Debug, Clone)]
pub enum DebtUpdate {
    Updated(Debt),
    NotFound,
    NotOwned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
    NotOwned,
}

pub async fn list_debts(state: &AppState, user_id: ObjectId) -> Result<Vec<Debt>, String> {
    let debts = state.db.collection::<Debt>("debts");

    let find_opts = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .build();

    let mut cursor = debts
        .find(doc! { "user_id": user_id }, find_opts)
        .await
        .map_err(|e| e.to_string())?;

    let mut items: Vec<Debt> = Vec::new();
    while let Some(res) = cursor.next().await {
        items.push(res.map_err(|e| e.to_string())?);
    }

    Ok(items)
}

pub async fn add_debt(
    state: &AppState,
    user_id: ObjectId,
    kind_raw: &str,
    person: &str,
    description: &str,
    amount: f64,
    due_date_raw: Option<&str>,
) -> Result<Debt, FieldErrors> {
    let mut errs: FieldErrors = HashMap::new();

    let kind = DebtKind::parse(kind_raw);
    if kind.is_none() {
        errs.insert("type".into(), "Type must be lent or borrowed.".into());
    }

    let person = person.trim();
    if person.is_empty() {
        errs.insert("person".into(), "Person is required.".into());
    }

    if !amount.is_finite() || amount <= 0.0 {
        errs.insert("amount".into(), "Enter a valid positive amount.".into());
    }

    let due_date = match due_date_raw {
        Some(s) if !s.trim().is_empty() => {
            match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
                Ok(d) => d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp()),
                Err(_) => {
                    errs.insert("dueDate".into(), "Due date must be YYYY-MM-DD.".into());
                    None
                }
            }
        }
        _ => None,
    };

    if !errs.is_empty() {
        return Err(errs);
    }
    let Some(kind) = kind else {
        return Err(errs);
    };

    let now = Utc::now().timestamp();
    let debt = Debt {
        id: ObjectId::new(),
        user_id,
        kind,
        person: person.to_string(),
        description: description.trim().to_string(),
        amount,
        due_date,
        status: DebtStatus::Pending,
        created_at: now,
        updated_at: now,
    };

    let debts = state.db.collection::<Debt>("debts");
    if let Err(e) = debts.insert_one(&debt, None).await {
        let mut errs = FieldErrors::new();
        errs.insert("_form".into(), format!("db error: {e}"));
        return Err(errs);
    }

    Ok(debt)
}

/// Flips pending <-> paid for a debt owned by the caller.
pub async fn toggle_debt_status(
    state: &AppState,
    user_id: ObjectId,
    id: ObjectId,
) -> Result<DebtUpdate, String> {
    let debts = state.db.collection::<Debt>("debts");

    let debt = debts
        .find_one(doc! { "_id": id }, None)
        .await
        .map_err(|e| e.to_string())?;

    let Some(mut debt) = debt else {
        return Ok(DebtUpdate::NotFound);
    };

    if debt.user_id != user_id {
        return Ok(DebtUpdate::NotOwned);
    }

    debt.status = match debt.status {
        DebtStatus::Pending => DebtStatus::Paid,
        DebtStatus::Paid => DebtStatus::Pending,
    };
    debt.updated_at = Utc::now().timestamp();

    let status = match debt.status {
        DebtStatus::Pending => "pending",
        DebtStatus::Paid => "paid",
    };

    debts
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { "status": status, "updated_at": debt.updated_at } },
            None,
        )
        .await
        .map_err(|e| e.to_string())?;

    Ok(DebtUpdate::Updated(debt))
}

pub async fn delete_debt(
    state: &AppState,
    user_id: ObjectId,
    id: ObjectId,
) -> Result<DeleteOutcome, String> {
    let debts = state.db.collection::<Debt>("debts");

    let debt = debts
        .find_one(doc! { "_id": id }, None)
        .await
        .map_err(|e| e.to_string())?;

    let Some(debt) = debt else {
        return Ok(DeleteOutcome::NotFound);
    };

    if debt.user_id != user_id {
        return Ok(DeleteOutcome::NotOwned);
    }

    debts
        .delete_one(doc! { "_id": id }, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(DeleteOutcome::Removed)
}
