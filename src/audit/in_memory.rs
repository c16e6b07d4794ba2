use crate::audit::{AuditEntry, AuditLog};
use crate::error::DivvyError;
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record(&self, entry: AuditEntry) -> Result<(), DivvyError> {
        self.entries.lock().await.push(entry);
        Ok(())
    }

    async fn entries(&self, group_id: Uuid) -> Result<Vec<AuditEntry>, DivvyError> {
        Ok(self
            .entries
            .lock()
            .await
            .iter()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect())
    }
}
