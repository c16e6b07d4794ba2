use crate::error::ValidationError;
use crate::models::{BudgetPeriod, BudgetStatus, Expense};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Derived budget standing for one period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub total_spent: Money,
    pub remaining: Money,
    /// Floored integer percentage, for display only. The warning
    /// threshold is compared at full precision, not against this.
    pub percentage_used: u32,
    pub status: BudgetStatus,
}

/// Sums the expenses falling inside the budget's date range and grades
/// the result against the limit and alert threshold.
pub fn evaluate_budget(
    budget: &BudgetPeriod,
    expenses: &[Expense],
) -> Result<BudgetReport, ValidationError> {
    if !budget.amount.is_positive() {
        return Err(ValidationError::InvalidAmount);
    }

    let total_spent: Money = expenses
        .iter()
        .filter(|e| in_period(budget, e))
        .map(|e| e.amount)
        .sum();

    // Exact integer comparison: spent/amount >= threshold/100 without
    // ever leaving minor units.
    let status = if total_spent > budget.amount {
        BudgetStatus::Exceeded
    } else if total_spent.minor() * 100 >= budget.amount.minor() * i64::from(budget.alert_threshold_pct)
    {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Ok
    };

    let percentage_used = total_spent
        .mul_ratio_floor(100, budget.amount.minor())
        .minor() as u32;

    debug!(%total_spent, ?status, "budget evaluated");
    Ok(BudgetReport {
        total_spent,
        remaining: budget.amount - total_spent,
        percentage_used,
        status,
    })
}

fn in_period(budget: &BudgetPeriod, expense: &Expense) -> bool {
    let date = expense.occurred_at.date_naive();
    date >= budget.start_date && budget.end_date.is_none_or(|end| date <= end)
}
