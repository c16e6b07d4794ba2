use crate::error::DivvyError;
use crate::models::{Expense, Member, Settlement};
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Group-keyed in-memory store. Each group's expense and settlement logs
/// are plain `Vec`s so append order survives, which the ledger feed's
/// tie-break depends on.
#[derive(Default)]
pub struct InMemoryStorage {
    members: Mutex<HashMap<Uuid, Vec<Member>>>,
    expenses: Mutex<HashMap<Uuid, Vec<Expense>>>,
    settlements: Mutex<HashMap<Uuid, Vec<Settlement>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_member(&self, member: Member) -> Result<(), DivvyError> {
        let mut members = self.members.lock().await;
        let group = members.entry(member.group_id).or_default();
        match group.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => *existing = member,
            None => group.push(member),
        }
        Ok(())
    }

    async fn get_member(
        &self,
        group_id: Uuid,
        member_id: Uuid,
    ) -> Result<Option<Member>, DivvyError> {
        Ok(self
            .members
            .lock()
            .await
            .get(&group_id)
            .and_then(|members| members.iter().find(|m| m.id == member_id).cloned()))
    }

    async fn list_members(&self, group_id: Uuid) -> Result<Vec<Member>, DivvyError> {
        Ok(self
            .members
            .lock()
            .await
            .get(&group_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_expense(&self, expense: Expense) -> Result<(), DivvyError> {
        self.expenses
            .lock()
            .await
            .entry(expense.group_id)
            .or_default()
            .push(expense);
        Ok(())
    }

    async fn list_expenses(&self, group_id: Uuid) -> Result<Vec<Expense>, DivvyError> {
        Ok(self
            .expenses
            .lock()
            .await
            .get(&group_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_settlement(&self, settlement: Settlement) -> Result<(), DivvyError> {
        self.settlements
            .lock()
            .await
            .entry(settlement.group_id)
            .or_default()
            .push(settlement);
        Ok(())
    }

    async fn list_settlements(&self, group_id: Uuid) -> Result<Vec<Settlement>, DivvyError> {
        Ok(self
            .settlements
            .lock()
            .await
            .get(&group_id)
            .cloned()
            .unwrap_or_default())
    }
}
