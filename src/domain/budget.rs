//! Domain models for budget definitions and derived budget state.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spending ceiling for a category over a recurring period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    /// Budgeted ceiling, strictly positive.
    pub amount: f64,
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: f64, period: BudgetPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            period,
        }
    }
}

/// Enumeration of budgeting periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Quarterly,
    Annual,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Quarterly => "Quarterly",
            BudgetPeriod::Annual => "Annual",
        };
        f.write_str(label)
    }
}

/// Consumption state of a budget relative to its ceiling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetState {
    UnderBudget,
    AtBudget,
    OverBudget,
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetState::UnderBudget => "Under Budget",
            BudgetState::AtBudget => "At Budget",
            BudgetState::OverBudget => "Over Budget",
        };
        f.write_str(label)
    }
}

/// Derived consumption snapshot for one budget. Computed fresh from a
/// ledger snapshot on every evaluation, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetStatus {
    pub budget_id: Uuid,
    pub category: String,
    pub amount: f64,
    pub spent: f64,
    /// `amount - spent`; negative once the budget is exceeded.
    pub remaining: f64,
    pub state: BudgetState,
}
