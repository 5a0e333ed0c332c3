//! Pure domain models: transactions, budgets, date windows, and the
//! transient aggregate shapes handed back to callers. No I/O, no storage.

pub mod budget;
pub mod category;
pub mod common;
pub mod summary;
pub mod transaction;

pub use budget::{Budget, BudgetPeriod, BudgetState, BudgetStatus};
pub use category::{category_suggestions, default_categories};
pub use common::DateRange;
pub use summary::{CategoryAggregate, DashboardSummary, TimeSeriesPoint, Totals};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
