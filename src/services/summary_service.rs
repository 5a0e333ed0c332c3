//! The fixed-shape dashboard summary: current-month totals, month-over-month
//! change, recent activity, and a trailing spending series.

use chrono::NaiveDate;

use crate::domain::common::{month_end, month_start, shift_month, DateRange};
use crate::domain::summary::DashboardSummary;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::ledger::TransactionFilter;
use crate::services::aggregation_service::{AggregationService, Bucketing};

/// Months of history included in the dashboard's spending-over-time series,
/// counting the `as_of` month itself.
const SPENDING_TREND_MONTHS: i32 = 6;

/// Number of recent ledger entries surfaced on the dashboard.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// Builds the dashboard aggregate from a ledger snapshot.
pub struct SummaryService;

impl SummaryService {
    /// Assembles the summary for the calendar month containing `as_of`.
    ///
    /// The snapshot must be in ledger insertion order; recent transactions
    /// are the most recently appended entries, newest first, regardless of
    /// their dates. An undefined month-over-month comparison (no previous
    /// activity) surfaces as `None`, not as an error.
    pub fn build_dashboard(snapshot: &[Transaction], as_of: NaiveDate) -> DashboardSummary {
        tracing::debug!(%as_of, entries = snapshot.len(), "building dashboard summary");
        let current_window = DateRange::from_ordered(month_start(as_of), month_end(as_of));
        let previous_reference = shift_month(month_start(as_of), -1);
        let previous_window =
            DateRange::from_ordered(previous_reference, month_end(previous_reference));

        let current = Self::in_window(snapshot, current_window);
        let previous = Self::in_window(snapshot, previous_window);

        let current_totals = AggregationService::totals(&current);
        let previous_totals = AggregationService::totals(&previous);
        // An undefined baseline is a display concern here, not an error.
        let monthly_change_percent =
            AggregationService::percent_change(current_totals.net(), previous_totals.net()).ok();

        let trend_start = month_start(shift_month(as_of, -(SPENDING_TREND_MONTHS - 1)));
        let trend_window = DateRange::from_ordered(trend_start, month_end(as_of));

        DashboardSummary {
            total_income: current_totals.income,
            total_expenses: current_totals.expenses,
            balance: current_totals.net(),
            monthly_change_percent,
            category_breakdown: AggregationService::sum_by_category(
                &current,
                TransactionKind::Expense,
            ),
            recent_transactions: snapshot
                .iter()
                .rev()
                .take(RECENT_TRANSACTION_COUNT)
                .cloned()
                .collect(),
            spending_over_time: AggregationService::sum_by_time_bucket(
                snapshot,
                &trend_window,
                Bucketing::Monthly,
            ),
        }
    }

    fn in_window(snapshot: &[Transaction], window: DateRange) -> Vec<Transaction> {
        let filter = TransactionFilter::new().with_date_range(window);
        snapshot
            .iter()
            .filter(|txn| filter.matches(txn))
            .cloned()
            .collect()
    }
}
