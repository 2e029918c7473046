use chrono::Utc;
use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::FindOptions;

use crate::{
    models::{Alert, ExpenseCategory},
    AppState,
};

pub async fn list_unread_alerts(
    state: &AppState,
    user_id: ObjectId,
) -> Result<Vec<Alert>, String> {
    let alerts = state.db.collection::<Alert>("alerts");

    let find_opts = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .build();

    let mut cursor = alerts
        .find(doc! { "user_id": user_id, "is_read": false }, find_opts)
        .await
        .map_err(|e| e.to_string())?;

    let mut items: Vec<Alert> = Vec::new();
    while let Some(res) = cursor.next().await {
        items.push(res.map_err(|e| e.to_string())?);
    }

    Ok(items)
}

pub async fn mark_all_read(state: &AppState, user_id: ObjectId) -> Result<u64, String> {
    let alerts = state.db.collection::<Alert>("alerts");

    let res = alerts
        .update_many(
            doc! { "user_id": user_id, "is_read": false },
            doc! { "$set": { "is_read": true } },
            None,
        )
        .await
        .map_err(|e| e.to_string())?;

    Ok(res.modified_count)
}

/// Persists a new alert unless one already exists for (user, category, month,
/// threshold). Check-and-insert is a single conditional write: the unique
/// index is the existence check, and a duplicate-key rejection means a
/// concurrent request already sent this alert — that is `Ok(None)`, not an
/// error. A read-then-write pair here would reopen the double-alert race.
pub async fn insert_alert_if_absent(
    state: &AppState,
    user_id: ObjectId,
    category: ExpenseCategory,
    month: &str,
    threshold: i64,
    message: &str,
) -> Result<Option<Alert>, String> {
    if !matches!(threshold, 50 | 90 | 100) {
        return Err(format!("invalid alert threshold: {threshold}"));
    }

    let alerts = state.db.collection::<Alert>("alerts");

    let alert = Alert {
        id: ObjectId::new(),
        user_id,
        message: message.to_string(),
        category,
        month: month.to_string(),
        threshold,
        is_read: false,
        created_at: Utc::now().timestamp(),
    };

    match alerts.insert_one(&alert, None).await {
        Ok(_) => Ok(Some(alert)),
        Err(e) if is_duplicate_key_error(&e) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

fn is_duplicate_key_error(e: &mongodb::error::Error) -> bool {
    match &*e.kind {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == 11000,
        ErrorKind::BulkWrite(bw) => bw
            .write_errors
            .as_ref()
            .map(|errs| errs.iter().any(|we| we.code == 11000))
            .unwrap_or(false),
        _ => false,
    }
}
