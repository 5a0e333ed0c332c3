//! The append-only transaction ledger and its filter engine.

pub mod filter;

pub use filter::TransactionFilter;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::transaction::{NewTransaction, Transaction};
use crate::errors::{CoreError, CoreResult};

/// The canonical, append-only collection of transactions.
///
/// Insertion order is the durability and display order; it is independent
/// of transaction dates and is preserved by every query. There is no
/// delete or in-place edit: corrections are compensating entries recorded
/// by a higher layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a new entry, returning its fresh identifier.
    pub fn append(&mut self, new: NewTransaction) -> CoreResult<Uuid> {
        validate_new_transaction(&new)?;
        let transaction = Transaction {
            id: Uuid::new_v4(),
            description: new.description,
            amount: new.amount,
            kind: new.kind,
            category: new.category,
            date: new.date,
        };
        let id = transaction.id;
        tracing::debug!(%id, kind = %transaction.kind, amount = transaction.amount, "transaction appended");
        self.transactions.push(transaction);
        Ok(id)
    }

    /// Returns matching transactions in ledger insertion order.
    pub fn query(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .cloned()
            .collect()
    }

    /// Full snapshot in insertion order.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

fn validate_new_transaction(new: &NewTransaction) -> CoreResult<()> {
    if new.description.trim().is_empty() {
        tracing::warn!("rejected transaction with empty description");
        return Err(CoreError::Validation(
            "transaction description must not be empty".into(),
        ));
    }
    if new.category.trim().is_empty() {
        tracing::warn!("rejected transaction with empty category");
        return Err(CoreError::Validation(
            "transaction category must not be empty".into(),
        ));
    }
    if new.amount <= 0.0 {
        tracing::warn!(amount = new.amount, "rejected transaction with non-positive amount");
        return Err(CoreError::Validation(format!(
            "transaction amount must be positive, got {}",
            new.amount
        )));
    }
    Ok(())
}
