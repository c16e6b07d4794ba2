pub mod budget;
pub mod expense;
pub mod member;
pub mod settlement;

pub use budget::{BudgetPeriod, BudgetStatus, PeriodKind};
pub use expense::{Expense, Share};
pub use member::Member;
pub use settlement::Settlement;
