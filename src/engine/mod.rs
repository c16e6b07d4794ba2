//! Pure computation core: no I/O, no interior mutability, safe to call
//! from any number of threads. The service layer owns persistence.

pub mod allocation;
pub mod budget;
pub mod ledger;
pub mod simplify;

pub use allocation::Allocation;
pub use budget::{BudgetReport, evaluate_budget};
pub use ledger::{LedgerView, Movement, aggregate};
pub use simplify::{SettlementSuggestion, simplify_debts};
