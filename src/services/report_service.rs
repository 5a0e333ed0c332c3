//! Report assembly for the spending, income, and trend views.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::DateRange;
use crate::domain::summary::{CategoryAggregate, TimeSeriesPoint};
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::ledger::TransactionFilter;
use crate::services::aggregation_service::{AggregationService, Bucketing};

/// The report shapes a caller can request over a date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Expense totals grouped by category.
    Spending,
    /// Income totals grouped by category.
    Income,
    /// Monthly income/expense series across the range.
    Trend,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportKind::Spending => "Spending",
            ReportKind::Income => "Income",
            ReportKind::Trend => "Trend",
        };
        f.write_str(label)
    }
}

/// A built report, ready for export or visualization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Report {
    Categories(Vec<CategoryAggregate>),
    Trend(Vec<TimeSeriesPoint>),
}

/// Assembles report views by delegating to the aggregator.
pub struct ReportService;

impl ReportService {
    /// Builds the requested report over the inclusive `range`.
    ///
    /// An empty matching set yields an empty category list for the
    /// category views and a full zero-filled series for the trend view.
    pub fn build(kind: ReportKind, range: DateRange, snapshot: &[Transaction]) -> Report {
        tracing::debug!(%kind, %range, "building report");
        match kind {
            ReportKind::Spending => Report::Categories(Self::categories_in_range(
                snapshot,
                range,
                TransactionKind::Expense,
            )),
            ReportKind::Income => Report::Categories(Self::categories_in_range(
                snapshot,
                range,
                TransactionKind::Income,
            )),
            ReportKind::Trend => Report::Trend(AggregationService::sum_by_time_bucket(
                snapshot,
                &range,
                Bucketing::Monthly,
            )),
        }
    }

    fn categories_in_range(
        snapshot: &[Transaction],
        range: DateRange,
        kind: TransactionKind,
    ) -> Vec<CategoryAggregate> {
        let filter = TransactionFilter::new().with_date_range(range);
        let in_range: Vec<Transaction> = snapshot
            .iter()
            .filter(|txn| filter.matches(txn))
            .cloned()
            .collect();
        AggregationService::sum_by_category(&in_range, kind)
    }
}
