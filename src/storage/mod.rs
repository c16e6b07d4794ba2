use crate::error::DivvyError;
use crate::models::{Expense, Member, Settlement};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence seam for group-scoped records.
///
/// Expenses and settlements are append-only logs per group; the ledger's
/// deterministic tie-break relies on implementations preserving append
/// order. Implementations must serialize writes per group so aggregation
/// always sees a causally consistent snapshot.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_member(&self, member: Member) -> Result<(), DivvyError>;
    async fn get_member(&self, group_id: Uuid, member_id: Uuid) -> Result<Option<Member>, DivvyError>;
    async fn list_members(&self, group_id: Uuid) -> Result<Vec<Member>, DivvyError>;

    async fn append_expense(&self, expense: Expense) -> Result<(), DivvyError>;
    async fn list_expenses(&self, group_id: Uuid) -> Result<Vec<Expense>, DivvyError>;

    async fn append_settlement(&self, settlement: Settlement) -> Result<(), DivvyError>;
    async fn list_settlements(&self, group_id: Uuid) -> Result<Vec<Settlement>, DivvyError>;
}

pub mod in_memory;
