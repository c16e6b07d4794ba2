use crate::error::DivvyError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One audited service action with a structured payload. How entries are
/// persisted is a collaborator concern behind the [`AuditLog`] trait.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub group_id: Uuid,
    pub action: String,
    pub details: Value,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(group_id: Uuid, action: &str, details: Value) -> Self {
        AuditEntry {
            id: Uuid::new_v4(),
            group_id,
            action: action.to_string(),
            details,
            recorded_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn record(&self, entry: AuditEntry) -> Result<(), DivvyError>;
    async fn entries(&self, group_id: Uuid) -> Result<Vec<AuditEntry>, DivvyError>;
}

pub mod in_memory;
