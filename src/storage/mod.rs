//! Collaborator interfaces for the excluded persistence layer, plus
//! in-memory reference implementations.
//!
//! The core never performs I/O itself; callers hand it a store and each
//! request works over the snapshot the store returns. The in-memory stores
//! serialize writes behind an `RwLock`, which preserves the unique-id and
//! insertion-order invariants under concurrent appends.

use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::domain::budget::Budget;
use crate::domain::transaction::{NewTransaction, Transaction};
use crate::errors::CoreResult;
use crate::ledger::Ledger;

/// Abstraction over the backend that durably holds the transaction ledger.
pub trait LedgerStore: Send + Sync {
    /// Validates and appends a transaction, returning its identifier.
    fn append(&self, new: NewTransaction) -> CoreResult<Uuid>;
    /// Returns a full snapshot in ledger insertion order.
    fn load_all(&self) -> CoreResult<Vec<Transaction>>;
}

/// Abstraction over the backend that holds budget definitions.
pub trait BudgetStore: Send + Sync {
    fn list(&self) -> CoreResult<Vec<Budget>>;
    fn save(&self, budget: Budget) -> CoreResult<Uuid>;
}

/// Ledger store backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    inner: RwLock<Ledger>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an existing ledger, keeping its order.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            inner: RwLock::new(ledger),
        }
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn append(&self, new: NewTransaction) -> CoreResult<Uuid> {
        let mut ledger = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        ledger.append(new)
    }

    fn load_all(&self) -> CoreResult<Vec<Transaction>> {
        let ledger = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(ledger.snapshot())
    }
}

/// Budget store backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryBudgetStore {
    inner: RwLock<Vec<Budget>>,
}

impl InMemoryBudgetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetStore for InMemoryBudgetStore {
    fn list(&self) -> CoreResult<Vec<Budget>> {
        let budgets = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(budgets.clone())
    }

    fn save(&self, budget: Budget) -> CoreResult<Uuid> {
        let mut budgets = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = budget.id;
        budgets.push(budget);
        Ok(id)
    }
}
