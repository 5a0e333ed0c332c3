//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! This module exposes the simplified API a UI or HTTP layer relies on
//! without depending on the entire service surface area. Every call loads
//! a fresh snapshot from the supplied store, so results are always
//! consistent with the ledger at request time.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::budget::{Budget, BudgetPeriod, BudgetStatus};
use crate::domain::category::category_suggestions;
use crate::domain::common::DateRange;
use crate::domain::summary::DashboardSummary;
use crate::domain::transaction::{NewTransaction, Transaction};
use crate::errors::CoreResult;
use crate::ledger::TransactionFilter;
use crate::services::{BudgetService, Report, ReportKind, ReportService, SummaryService};
use crate::storage::{BudgetStore, LedgerStore};

/// Records a transaction and returns its assigned identifier.
pub fn api_record_transaction(
    ledger: &dyn LedgerStore,
    new: NewTransaction,
) -> CoreResult<Uuid> {
    ledger.append(new)
}

/// Returns the transactions matching `filter`, in ledger insertion order.
pub fn api_filter_transactions(
    ledger: &dyn LedgerStore,
    filter: &TransactionFilter,
) -> CoreResult<Vec<Transaction>> {
    let snapshot = ledger.load_all()?;
    Ok(snapshot
        .into_iter()
        .filter(|txn| filter.matches(txn))
        .collect())
}

/// Builds the dashboard summary for the month containing `as_of`.
pub fn api_build_dashboard_summary(
    ledger: &dyn LedgerStore,
    as_of: NaiveDate,
) -> CoreResult<DashboardSummary> {
    let snapshot = ledger.load_all()?;
    Ok(SummaryService::build_dashboard(&snapshot, as_of))
}

/// Builds the requested report over `range`.
pub fn api_build_report(
    ledger: &dyn LedgerStore,
    kind: ReportKind,
    range: DateRange,
) -> CoreResult<Report> {
    let snapshot = ledger.load_all()?;
    Ok(ReportService::build(kind, range, &snapshot))
}

/// Creates and persists a budget, rejecting invalid definitions and
/// (category, period) duplicates.
pub fn api_create_budget(
    budgets: &dyn BudgetStore,
    category: impl Into<String>,
    amount: f64,
    period: BudgetPeriod,
) -> CoreResult<Budget> {
    let existing = budgets.list()?;
    let budget = BudgetService::create(category, amount, period, &existing)?;
    budgets.save(budget.clone())?;
    Ok(budget)
}

/// Evaluates every stored budget against the current ledger, optionally
/// restricted to one period.
pub fn api_evaluate_budgets(
    ledger: &dyn LedgerStore,
    budgets: &dyn BudgetStore,
    period: Option<BudgetPeriod>,
    as_of: NaiveDate,
) -> CoreResult<Vec<BudgetStatus>> {
    let snapshot = ledger.load_all()?;
    let definitions = budgets.list()?;
    Ok(BudgetService::evaluate_all(
        &definitions,
        &snapshot,
        period,
        as_of,
    ))
}

/// Category suggestions for pickers: built-in defaults plus every category
/// observed in the ledger.
pub fn api_category_suggestions(ledger: &dyn LedgerStore) -> CoreResult<Vec<String>> {
    let snapshot = ledger.load_all()?;
    Ok(category_suggestions(&snapshot))
}
