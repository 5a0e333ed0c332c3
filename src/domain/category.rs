//! Category suggestions for UI pickers.
//!
//! Categories are free text on transactions and budgets, not a closed
//! enumeration; this module only maintains the reference set surfaced as
//! suggestions. It is never used to validate input.

use crate::domain::transaction::Transaction;

/// Built-in suggestion list shown before any ledger data exists.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Housing",
    "Food",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Shopping",
    "Healthcare",
    "Education",
    "Income",
    "Other",
];

/// Returns the built-in suggestions as owned strings.
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Merges the built-in suggestions with every category observed in the
/// ledger snapshot: defaults first, then ledger categories in first-seen
/// order, deduplicated.
pub fn category_suggestions(transactions: &[Transaction]) -> Vec<String> {
    let mut suggestions = default_categories();
    for txn in transactions {
        if !suggestions.iter().any(|c| c == &txn.category) {
            suggestions.push(txn.category.clone());
        }
    }
    suggestions
}
