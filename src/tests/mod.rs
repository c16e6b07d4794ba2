mod budget_tests;
mod money_tests;

use crate::{DivvyService, InMemoryAuditLog, InMemoryStorage};
use uuid::Uuid;

pub fn create_test_service() -> DivvyService<InMemoryStorage, InMemoryAuditLog> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    DivvyService::new(InMemoryStorage::new(), InMemoryAuditLog::new())
}

/// Deterministic member ids so tie-break assertions are stable.
pub fn member_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}
