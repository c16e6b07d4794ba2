use crate::money::Money;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while composing or finalizing an expense allocation.
/// All recoverable: the caller re-edits and retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Shares do not sum exactly to the expense total
    #[error("shares sum to {actual} but expense total is {expected}")]
    ShareSumMismatch { expected: Money, actual: Money },

    /// Total or share amount is non-positive or malformed
    #[error("invalid amount")]
    InvalidAmount,

    /// Share index does not address a member of the allocation
    #[error("share index {0} out of range")]
    ShareIndexOutOfRange(usize),
}

/// Zero-sum postcondition violated during ledger aggregation. Indicates
/// upstream data corruption (e.g. a persisted expense whose shares no
/// longer sum to its amount); never repaired locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ledger out of balance by {residual}")]
pub struct LedgerInconsistency {
    pub residual: Money,
}

/// Service-level error surface returned to the API collaborator.
#[derive(Error, Debug)]
pub enum DivvyError {
    /// Group has no members (or was never set up)
    #[error("group {0} not found")]
    GroupNotFound(Uuid),

    /// No member record exists for the given ID
    #[error("member {0} not found")]
    MemberNotFound(Uuid),

    /// Member with given ID is not part of the group
    #[error("member {0} is not a group member")]
    NotGroupMember(Uuid),

    /// Cannot record a settlement from a member to themselves
    #[error("cannot settle against oneself")]
    SelfSettlement,

    /// Placeholder seat already has a user attached
    #[error("seat {0} is already claimed")]
    SeatAlreadyClaimed(Uuid),

    /// Suggestion no longer matches the freshly recomputed ledger;
    /// the caller must recompute suggestions and retry
    #[error("settlement suggestion is stale; recompute before applying")]
    StaleSettlementSuggestion,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Ledger(#[from] LedgerInconsistency),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("audit log error: {0}")]
    Audit(String),
}
