use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodKind {
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

/// A spending limit over a date range. `end_date: None` means the period
/// is still open-ended.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BudgetPeriod {
    pub amount: Money,
    pub kind: PeriodKind,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub alert_threshold_pct: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    Ok,
    Warning,
    Exceeded,
}
