use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// A computed, not-yet-recorded transfer that would reduce outstanding
/// balances if executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSuggestion {
    pub from: Uuid,
    pub to: Uuid,
    pub amount: Money,
}

/// Collapses a zero-sum balance set into a short list of transfers that,
/// if all executed, zero every balance.
///
/// Greedy largest-magnitude matching: repeatedly pair the largest
/// remaining creditor with the largest remaining debtor, transfer the
/// smaller of the two magnitudes, drop whoever reaches zero. Ties go to
/// the lower member id, so identical inputs always yield an identical
/// suggestion list. Emits at most n-1 suggestions for n non-zero parties;
/// not guaranteed minimum-cardinality.
pub fn simplify_debts(balances: &BTreeMap<Uuid, Money>) -> Vec<SettlementSuggestion> {
    let mut creditors: Vec<(Uuid, Money)> = balances
        .iter()
        .filter(|(_, bal)| bal.is_positive())
        .map(|(&id, &bal)| (id, bal))
        .collect();
    let mut debtors: Vec<(Uuid, Money)> = balances
        .iter()
        .filter(|(_, bal)| bal.is_negative())
        .map(|(&id, &bal)| (id, bal.abs()))
        .collect();

    let mut suggestions = Vec::new();
    while !creditors.is_empty() && !debtors.is_empty() {
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        debtors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let transfer = creditors[0].1.min(debtors[0].1);
        suggestions.push(SettlementSuggestion {
            from: debtors[0].0,
            to: creditors[0].0,
            amount: transfer,
        });

        creditors[0].1 -= transfer;
        debtors[0].1 -= transfer;
        creditors.retain(|(_, bal)| !bal.is_zero());
        debtors.retain(|(_, bal)| !bal.is_zero());
    }

    debug!(count = suggestions.len(), "debts simplified");
    suggestions
}
