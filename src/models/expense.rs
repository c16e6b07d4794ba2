use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One member's portion of an expense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub member_id: Uuid,
    pub amount: Money,
}

/// A recorded group expense. Immutable once persisted.
///
/// Invariant: `shares` sums exactly to `amount` in minor units; the
/// allocation engine enforces this before a record is ever built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub group_id: Uuid,
    pub paid_by: Uuid,
    pub amount: Money,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
    pub shares: Vec<Share>,
}
