use chrono::NaiveDate;
use finance_core::domain::{NewTransaction, TransactionKind};
use finance_core::storage::InMemoryLedgerStore;
use finance_core::storage::LedgerStore;

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn entry(
    description: &str,
    amount: f64,
    kind: TransactionKind,
    category: &str,
    date: NaiveDate,
) -> NewTransaction {
    NewTransaction::new(description, amount, kind, category, date)
}

/// Seeds a store with the June 2023 ledger used throughout the suites:
/// Salary 4250 (Income), Rent 800 (Housing), Groceries 150 (Food).
pub fn june_store() -> InMemoryLedgerStore {
    let store = InMemoryLedgerStore::new();
    store
        .append(entry(
            "Salary",
            4250.0,
            TransactionKind::Income,
            "Income",
            sample_date(2023, 6, 1),
        ))
        .expect("seed salary");
    store
        .append(entry(
            "Rent",
            800.0,
            TransactionKind::Expense,
            "Housing",
            sample_date(2023, 6, 3),
        ))
        .expect("seed rent");
    store
        .append(entry(
            "Groceries",
            150.0,
            TransactionKind::Expense,
            "Food",
            sample_date(2023, 6, 5),
        ))
        .expect("seed groceries");
    store
}
