use crate::error::LedgerInconsistency;
use crate::models::{Expense, Settlement};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// One entry of the merged group activity feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Movement {
    Expense {
        id: Uuid,
        paid_by: Uuid,
        amount: Money,
        description: String,
        occurred_at: DateTime<Utc>,
    },
    Settlement {
        id: Uuid,
        from: Uuid,
        to: Uuid,
        amount: Money,
        occurred_at: DateTime<Utc>,
    },
}

impl Movement {
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Movement::Expense { occurred_at, .. } | Movement::Settlement { occurred_at, .. } => {
                *occurred_at
            }
        }
    }
}

/// Derived view over the group's append-only log: per-member net balance
/// plus the chronological movement feed. Recomputed on demand, never
/// persisted as authoritative state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerView {
    pub balances: BTreeMap<Uuid, Money>,
    pub feed: Vec<Movement>,
}

/// Folds expenses and settlements into net balances and a movement feed.
///
/// Per expense the payer is credited the full amount and every share
/// member is debited their share; a payer who also appears in the shares
/// nets out through the same entry. A settlement is a real payment, so it
/// pulls both parties toward zero: `from`'s debt shrinks (+amount) and
/// `to`'s credit shrinks (-amount). Executing a suggested transfer
/// therefore zeroes the matched balances when it re-enters the ledger.
/// The feed is sorted by `occurred_at` descending with insertion
/// order ascending as the tie-break (expenses in input order, then
/// settlements), so equal timestamps still order deterministically.
///
/// Postcondition: balances sum to zero exactly. A violation means an
/// upstream record is corrupt and surfaces as `LedgerInconsistency`
/// rather than being patched over.
pub fn aggregate(
    expenses: &[Expense],
    settlements: &[Settlement],
) -> Result<LedgerView, LedgerInconsistency> {
    let mut balances: BTreeMap<Uuid, Money> = BTreeMap::new();
    let mut feed: Vec<(usize, Movement)> = Vec::with_capacity(expenses.len() + settlements.len());
    let mut seq = 0usize;

    for expense in expenses {
        *balances.entry(expense.paid_by).or_insert(Money::ZERO) += expense.amount;
        for share in &expense.shares {
            *balances.entry(share.member_id).or_insert(Money::ZERO) -= share.amount;
        }
        feed.push((
            seq,
            Movement::Expense {
                id: expense.id,
                paid_by: expense.paid_by,
                amount: expense.amount,
                description: expense.description.clone(),
                occurred_at: expense.occurred_at,
            },
        ));
        seq += 1;
    }

    for settlement in settlements {
        *balances.entry(settlement.from).or_insert(Money::ZERO) += settlement.amount;
        *balances.entry(settlement.to).or_insert(Money::ZERO) -= settlement.amount;
        feed.push((
            seq,
            Movement::Settlement {
                id: settlement.id,
                from: settlement.from,
                to: settlement.to,
                amount: settlement.amount,
                occurred_at: settlement.occurred_at,
            },
        ));
        seq += 1;
    }

    let residual: Money = balances.values().copied().sum();
    if !residual.is_zero() {
        return Err(LedgerInconsistency { residual });
    }

    feed.sort_by(|(seq_a, a), (seq_b, b)| {
        b.occurred_at()
            .cmp(&a.occurred_at())
            .then(seq_a.cmp(seq_b))
    });
    let feed = feed.into_iter().map(|(_, movement)| movement).collect();

    debug!(
        members = balances.len(),
        expenses = expenses.len(),
        settlements = settlements.len(),
        "ledger aggregated"
    );
    Ok(LedgerView { balances, feed })
}
