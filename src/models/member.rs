use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A seat in a group. `user_id` stays `None` while the seat is an
/// unclaimed placeholder awaiting an invitation; allocation and ledger
/// math treat claimed and unclaimed seats identically.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: Option<Uuid>,
    pub display_name: String,
}
