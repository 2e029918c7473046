use futures_util::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::{
    models::{Budget, ExpenseCategory},
    AppState,
};

pub async fn find_budget(
    state: &AppState,
    user_id: ObjectId,
    category: ExpenseCategory,
    month: &str,
) -> Result<Option<Budget>, String> {
    let budgets = state.db.collection::<Budget>("budgets");
    budgets
        .find_one(
            doc! { "user_id": user_id, "category": category.as_str(), "month": month },
            None,
        )
        .await
        .map_err(|e| e.to_string())
}

/// Sets the ceiling for (user, category, month), creating the document on
/// first write and updating the amount in place afterwards. The unique index
/// on the triple keeps concurrent upserts down to one document.
pub async fn set_budget(
    state: &AppState,
    user_id: ObjectId,
    category: ExpenseCategory,
    month: &str,
    amount: f64,
) -> Result<Budget, String> {
    let budgets = state.db.collection::<Budget>("budgets");

    let opts = FindOneAndUpdateOptions::builder()
        .upsert(true)
        .return_document(ReturnDocument::After)
        .build();

    budgets
        .find_one_and_update(
            doc! { "user_id": user_id, "category": category.as_str(), "month": month },
            doc! { "$set": { "amount": amount } },
            opts,
        )
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "budget upsert returned no document".to_string())
}

pub async fn list_budgets(
    state: &AppState,
    user_id: ObjectId,
    month: &str,
) -> Result<Vec<Budget>, String> {
    let budgets = state.db.collection::<Budget>("budgets");

    let mut cursor = budgets
        .find(doc! { "user_id": user_id, "month": month }, None)
        .await
        .map_err(|e| e.to_string())?;

    let mut items: Vec<Budget> = Vec::new();
    while let Some(res) = cursor.next().await {
        items.push(res.map_err(|e| e.to_string())?);
    }

    Ok(items)
}
