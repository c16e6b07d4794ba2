use crate::audit::{AuditEntry, AuditLog};
use crate::constants::{
    EXPENSE_RECORDED, MEMBER_ADDED, SEAT_CLAIMED, SETTLEMENT_RECORDED, SUGGESTION_APPLIED,
};
use crate::engine::{
    BudgetReport, LedgerView, SettlementSuggestion, aggregate, evaluate_budget, simplify_debts,
};
use crate::error::{DivvyError, ValidationError};
use crate::models::{BudgetPeriod, Expense, Member, Settlement, Share};
use crate::money::Money;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

/// Orchestration over the pure engine: validates inputs against group
/// membership, persists records through [`Storage`], and audits every
/// mutation. Balances and suggestions are always recomputed from the
/// append-only log, never cached.
pub struct DivvyService<S: Storage, A: AuditLog> {
    storage: S,
    audit: A,
}

impl<S: Storage, A: AuditLog> DivvyService<S, A> {
    pub fn new(storage: S, audit: A) -> Self {
        DivvyService { storage, audit }
    }

    /// Adds a seat to a group. `user_id: None` creates an unclaimed
    /// placeholder, which participates in allocations and the ledger
    /// exactly like a claimed seat.
    pub async fn add_member(
        &self,
        group_id: Uuid,
        display_name: String,
        user_id: Option<Uuid>,
    ) -> Result<Member, DivvyError> {
        let member = Member {
            id: Uuid::new_v4(),
            group_id,
            user_id,
            display_name,
        };
        self.storage.save_member(member.clone()).await?;
        info!(%group_id, member_id = %member.id, placeholder = user_id.is_none(), "member added");

        self.audit
            .record(AuditEntry::new(
                group_id,
                MEMBER_ADDED,
                json!({ "member_id": member.id, "display_name": member.display_name, "user_id": member.user_id }),
            ))
            .await?;
        Ok(member)
    }

    /// Attaches a user to a placeholder seat (invitation accepted).
    pub async fn claim_seat(
        &self,
        group_id: Uuid,
        member_id: Uuid,
        user_id: Uuid,
    ) -> Result<Member, DivvyError> {
        let mut member = self
            .storage
            .get_member(group_id, member_id)
            .await?
            .ok_or(DivvyError::MemberNotFound(member_id))?;
        if member.user_id.is_some() {
            return Err(DivvyError::SeatAlreadyClaimed(member_id));
        }
        member.user_id = Some(user_id);
        self.storage.save_member(member.clone()).await?;

        self.audit
            .record(AuditEntry::new(
                group_id,
                SEAT_CLAIMED,
                json!({ "member_id": member_id, "user_id": user_id }),
            ))
            .await?;
        Ok(member)
    }

    /// Records an expense with its finalized share list. The exact-sum
    /// invariant is re-checked here so no record can be persisted with
    /// drifting shares, whatever the caller did upstream.
    pub async fn record_expense(
        &self,
        group_id: Uuid,
        paid_by: Uuid,
        description: String,
        total: Money,
        shares: Vec<Share>,
        occurred_at: DateTime<Utc>,
    ) -> Result<Expense, DivvyError> {
        let members = self.group_members(group_id).await?;
        if !members.iter().any(|m| m.id == paid_by) {
            return Err(DivvyError::NotGroupMember(paid_by));
        }
        for share in &shares {
            if !members.iter().any(|m| m.id == share.member_id) {
                return Err(DivvyError::NotGroupMember(share.member_id));
            }
        }
        if !total.is_positive() {
            return Err(ValidationError::InvalidAmount.into());
        }
        // A negative share would credit a member through an expense; zero
        // is legal (equal splits of tiny totals floor to zero).
        if shares.iter().any(|s| s.amount.is_negative()) {
            return Err(ValidationError::InvalidAmount.into());
        }
        let share_sum: Money = shares.iter().map(|s| s.amount).sum();
        if share_sum != total {
            return Err(ValidationError::ShareSumMismatch {
                expected: total,
                actual: share_sum,
            }
            .into());
        }

        let expense = Expense {
            id: Uuid::new_v4(),
            group_id,
            paid_by,
            amount: total,
            description,
            occurred_at,
            shares,
        };
        self.storage.append_expense(expense.clone()).await?;
        info!(%group_id, expense_id = %expense.id, amount = %expense.amount, "expense recorded");

        self.audit
            .record(AuditEntry::new(
                group_id,
                EXPENSE_RECORDED,
                json!({
                    "expense_id": expense.id,
                    "paid_by": expense.paid_by,
                    "amount": expense.amount,
                    "description": expense.description,
                }),
            ))
            .await?;
        Ok(expense)
    }

    /// Records a real payment between two members.
    pub async fn record_settlement(
        &self,
        group_id: Uuid,
        from: Uuid,
        to: Uuid,
        amount: Money,
        occurred_at: DateTime<Utc>,
    ) -> Result<Settlement, DivvyError> {
        let members = self.group_members(group_id).await?;
        for member_id in [from, to] {
            if !members.iter().any(|m| m.id == member_id) {
                return Err(DivvyError::NotGroupMember(member_id));
            }
        }
        if from == to {
            return Err(DivvyError::SelfSettlement);
        }
        if !amount.is_positive() {
            return Err(ValidationError::InvalidAmount.into());
        }

        let settlement = Settlement {
            id: Uuid::new_v4(),
            group_id,
            from,
            to,
            amount,
            occurred_at,
        };
        self.storage.append_settlement(settlement.clone()).await?;
        info!(%group_id, settlement_id = %settlement.id, amount = %settlement.amount, "settlement recorded");

        self.audit
            .record(AuditEntry::new(
                group_id,
                SETTLEMENT_RECORDED,
                json!({
                    "settlement_id": settlement.id,
                    "from": settlement.from,
                    "to": settlement.to,
                    "amount": settlement.amount,
                }),
            ))
            .await?;
        Ok(settlement)
    }

    /// Recomputes the group ledger from the full log. Every group member
    /// appears in the balance map, at zero if untouched, so placeholder
    /// seats are visible to the caller.
    pub async fn ledger(&self, group_id: Uuid) -> Result<LedgerView, DivvyError> {
        let members = self.group_members(group_id).await?;
        let expenses = self.storage.list_expenses(group_id).await?;
        let settlements = self.storage.list_settlements(group_id).await?;

        let mut view = aggregate(&expenses, &settlements)?;
        for member in &members {
            view.balances.entry(member.id).or_insert(Money::ZERO);
        }
        Ok(view)
    }

    pub async fn suggest_settlements(
        &self,
        group_id: Uuid,
    ) -> Result<Vec<SettlementSuggestion>, DivvyError> {
        let view = self.ledger(group_id).await?;
        Ok(simplify_debts(&view.balances))
    }

    /// Turns a suggestion into a recorded settlement, re-validating it
    /// against a freshly recomputed ledger immediately before persisting.
    /// A suggestion computed before a concurrent settlement landed no
    /// longer appears in the fresh list and is rejected as stale; the
    /// caller recomputes and retries.
    pub async fn settle_from_suggestion(
        &self,
        group_id: Uuid,
        suggestion: SettlementSuggestion,
        occurred_at: DateTime<Utc>,
    ) -> Result<Settlement, DivvyError> {
        let fresh = self.suggest_settlements(group_id).await?;
        if !fresh.contains(&suggestion) {
            warn!(%group_id, from = %suggestion.from, to = %suggestion.to, amount = %suggestion.amount,
                "stale settlement suggestion rejected");
            return Err(DivvyError::StaleSettlementSuggestion);
        }

        let settlement = self
            .record_settlement(
                group_id,
                suggestion.from,
                suggestion.to,
                suggestion.amount,
                occurred_at,
            )
            .await?;

        self.audit
            .record(AuditEntry::new(
                group_id,
                SUGGESTION_APPLIED,
                json!({ "settlement_id": settlement.id, "amount": settlement.amount }),
            ))
            .await?;
        Ok(settlement)
    }

    pub async fn evaluate_budget(
        &self,
        group_id: Uuid,
        budget: &BudgetPeriod,
    ) -> Result<BudgetReport, DivvyError> {
        self.group_members(group_id).await?;
        let expenses = self.storage.list_expenses(group_id).await?;
        Ok(evaluate_budget(budget, &expenses)?)
    }

    pub async fn audit_trail(&self, group_id: Uuid) -> Result<Vec<AuditEntry>, DivvyError> {
        self.audit.entries(group_id).await
    }

    async fn group_members(&self, group_id: Uuid) -> Result<Vec<Member>, DivvyError> {
        let members = self.storage.list_members(group_id).await?;
        if members.is_empty() {
            return Err(DivvyError::GroupNotFound(group_id));
        }
        Ok(members)
    }
}
