//! Transient aggregate shapes returned by the reporting and summary
//! services. None of these are persisted; they are rebuilt per request and
//! hold no references into the ledger.

use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

/// Summed amount for a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryAggregate {
    pub category: String,
    pub amount: f64,
}

/// One bucket of a chronological income/expense series. Buckets with no
/// matching transactions still appear with zero values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub income: f64,
    pub expenses: f64,
}

/// Directed sums over a transaction set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
}

impl Totals {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// The fixed-shape dashboard view: current-month totals, month-over-month
/// change, and recent activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    /// `None` when the previous month has no net activity to compare
    /// against ("no comparison available").
    pub monthly_change_percent: Option<f64>,
    pub category_breakdown: Vec<CategoryAggregate>,
    pub recent_transactions: Vec<Transaction>,
    pub spending_over_time: Vec<TimeSeriesPoint>,
}
