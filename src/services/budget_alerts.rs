use mongodb::bson::oid::ObjectId;

use crate::{
    models::{Alert, ExpenseCategory},
    services::{alerts_service, budget_service, spending_service},
    AppState,
};

/// Alert thresholds as percentages of the budget ceiling, most severe first.
/// Scan order matters: a single transaction can jump several thresholds at
/// once and only the highest crossed one fires.
pub const THRESHOLDS: [i64; 3] = [100, 90, 50];

fn to_paise(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Highest threshold newly crossed when cumulative monthly spending moves
/// from `before` to `after` against `ceiling`, or None.
///
/// A threshold t is newly crossed iff `before < ceiling*t/100 <= after`.
/// Landing exactly on the mark counts as crossing. The comparison runs on
/// integer paise with cross-multiplication (no division), so cent-level
/// float dust cannot flip a decision. A non-positive or non-finite ceiling
/// means "no budget configured", never "always exceeded".
pub fn newly_crossed_threshold(before: f64, after: f64, ceiling: f64) -> Option<i64> {
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return None;
    }

    let before_p = to_paise(before.max(0.0));
    let after_p = to_paise(after);
    let ceiling_p = to_paise(ceiling);

    THRESHOLDS.into_iter().find(|&t| {
        // before < ceiling * t/100 <= after, scaled by 100 on both sides
        let mark = ceiling_p * t;
        before_p * 100 < mark && mark <= after_p * 100
    })
}

pub fn render_message(threshold: i64, ceiling: f64, category: ExpenseCategory) -> String {
    format!(
        "You have used {}% of your ₹{} budget for {}.",
        threshold,
        ceiling,
        category.as_str()
    )
}

/// Budget check for a just-persisted expense transaction: look up the
/// ceiling, recompute the month's total, and emit at most one alert for the
/// highest newly crossed threshold. The transaction is already committed, so
/// callers reduce an `Err` here to "no alert" — it never fails the request.
pub async fn check_new_expense(
    state: &AppState,
    user_id: ObjectId,
    category: ExpenseCategory,
    month: &str,
    amount: f64,
) -> Result<Option<Alert>, String> {
    let Some(budget) = budget_service::find_budget(state, user_id, category, month).await? else {
        // no budget configured for this category/month
        return Ok(None);
    };

    // The transaction is already in the store, so the aggregate is the
    // "after" total and "before" falls out by subtraction.
    let after = spending_service::sum_expense_amount(state, user_id, category, month).await?;
    let before = after - amount;

    let Some(threshold) = newly_crossed_threshold(before, after, budget.amount) else {
        return Ok(None);
    };

    let message = render_message(threshold, budget.amount, category);
    alerts_service::insert_alert_if_absent(state, user_id, category, month, threshold, &message)
        .await
}
