//! Audit action names, kept in one place so log consumers can match on them.

pub const MEMBER_ADDED: &str = "member_added";
pub const SEAT_CLAIMED: &str = "seat_claimed";
pub const EXPENSE_RECORDED: &str = "expense_recorded";
pub const SETTLEMENT_RECORDED: &str = "settlement_recorded";
pub const SUGGESTION_APPLIED: &str = "suggestion_applied";
