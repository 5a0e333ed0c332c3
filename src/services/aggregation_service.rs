//! Grouped sums and derived statistics over transaction snapshots.

use serde::{Deserialize, Serialize};

use crate::domain::common::{month_index, shift_month, DateRange};
use crate::domain::summary::{CategoryAggregate, TimeSeriesPoint, Totals};
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::{CoreError, CoreResult};

/// Granularity for time-series partitioning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Bucketing {
    /// One bucket per calendar month.
    Monthly,
}

/// Aggregation helpers over [`Transaction`] snapshots.
pub struct AggregationService;

impl AggregationService {
    /// Groups matching transactions by category, summing amounts.
    ///
    /// Sparse: categories with no matching transactions are omitted.
    /// Ordering is first-seen; callers needing display order re-sort.
    pub fn sum_by_category(
        transactions: &[Transaction],
        kind: TransactionKind,
    ) -> Vec<CategoryAggregate> {
        let mut aggregates: Vec<CategoryAggregate> = Vec::new();
        for txn in transactions.iter().filter(|txn| txn.kind == kind) {
            match aggregates.iter_mut().find(|a| a.category == txn.category) {
                Some(aggregate) => aggregate.amount += txn.amount,
                None => aggregates.push(CategoryAggregate {
                    category: txn.category.clone(),
                    amount: txn.amount,
                }),
            }
        }
        aggregates
    }

    /// Partitions `range` into contiguous buckets and sums income and
    /// expenses per bucket.
    ///
    /// The series always has one point per bucket spanned by the range,
    /// zero-filled where no transactions match; transactions outside the
    /// range are ignored.
    pub fn sum_by_time_bucket(
        transactions: &[Transaction],
        range: &DateRange,
        bucketing: Bucketing,
    ) -> Vec<TimeSeriesPoint> {
        let Bucketing::Monthly = bucketing;
        let first_bucket = month_index(range.start());
        let mut series: Vec<TimeSeriesPoint> = (0..range.months_spanned())
            .map(|offset| TimeSeriesPoint {
                label: shift_month(range.start(), offset as i32)
                    .format("%b %Y")
                    .to_string(),
                income: 0.0,
                expenses: 0.0,
            })
            .collect();

        for txn in transactions.iter().filter(|txn| range.contains(txn.date)) {
            let bucket = (month_index(txn.date) - first_bucket) as usize;
            let point = &mut series[bucket];
            match txn.kind {
                TransactionKind::Income => point.income += txn.amount,
                TransactionKind::Expense => point.expenses += txn.amount,
            }
        }
        series
    }

    /// Simple directed sums over a snapshot.
    pub fn totals(transactions: &[Transaction]) -> Totals {
        transactions.iter().fold(Totals::default(), |mut acc, txn| {
            match txn.kind {
                TransactionKind::Income => acc.income += txn.amount,
                TransactionKind::Expense => acc.expenses += txn.amount,
            }
            acc
        })
    }

    /// Percent change of `current` relative to `previous`.
    ///
    /// A zero baseline with nonzero current has no defined percentage and
    /// is signaled as [`CoreError::DivisionUndefined`]; both zero is `0`.
    pub fn percent_change(current: f64, previous: f64) -> CoreResult<f64> {
        if previous == 0.0 {
            if current == 0.0 {
                return Ok(0.0);
            }
            return Err(CoreError::DivisionUndefined);
        }
        Ok(((current - previous) / previous) * 100.0)
    }
}
