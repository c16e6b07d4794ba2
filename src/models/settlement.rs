use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A real-world payment between two members, reducing `from`'s debt
/// toward `to`. `amount` is always positive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub id: Uuid,
    pub group_id: Uuid,
    pub from: Uuid,
    pub to: Uuid,
    pub amount: Money,
    pub occurred_at: DateTime<Utc>,
}
