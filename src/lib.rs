//! divvy: group expense allocation and debt-settlement engine.
//!
//! Pure computation lives in [`engine`]; [`service::DivvyService`] wires
//! it to pluggable [`storage`] and [`audit`] backends. All currency math
//! is exact integer minor-unit arithmetic via [`money::Money`].

pub mod audit;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod money;
pub mod service;
pub mod storage;

pub use audit::in_memory::InMemoryAuditLog;
pub use engine::{Allocation, BudgetReport, LedgerView, Movement, SettlementSuggestion};
pub use error::{DivvyError, LedgerInconsistency, ValidationError};
pub use money::Money;
pub use service::DivvyService;
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
