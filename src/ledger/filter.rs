//! Composable transaction filtering.
//!
//! Every criterion is independently optional and they combine with logical
//! AND. Filtering is pure: the same criteria against the same ledger
//! snapshot always produce the same sequence, in ledger order.

use serde::{Deserialize, Serialize};

use crate::domain::common::DateRange;
use crate::domain::transaction::{Transaction, TransactionKind};

/// Search criteria for ledger queries. An empty filter matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Case-insensitive substring matched against description or category.
    pub text: Option<String>,
    /// Exact kind; `None` means "all".
    pub kind: Option<TransactionKind>,
    /// Exact category; `None` means "all".
    pub category: Option<String>,
    /// Inclusive date bounds; validated at construction by [`DateRange`].
    pub date_range: Option<DateRange>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Applies every present criterion to the transaction.
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(text) = self.text.as_deref() {
            if !text.is_empty() && !text_matches(text, txn) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if txn.category != category {
                return false;
            }
        }
        if let Some(range) = &self.date_range {
            if !range.contains(txn.date) {
                return false;
            }
        }
        true
    }
}

fn text_matches(needle: &str, txn: &Transaction) -> bool {
    let needle = needle.to_lowercase();
    txn.description.to_lowercase().contains(&needle)
        || txn.category.to_lowercase().contains(&needle)
}
