//! Budget definitions, period windows, and derived consumption state.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::domain::budget::{Budget, BudgetPeriod, BudgetState, BudgetStatus};
use crate::domain::common::{month_end, month_start, shift_month, DateRange};
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::{CoreError, CoreResult};
use crate::ledger::TransactionFilter;

/// Stateless budgeting utilities.
///
/// Budget consumption is always derived from the supplied ledger snapshot
/// at evaluation time; nothing is cached between calls, so status can
/// never go stale relative to the ledger.
pub struct BudgetService;

impl BudgetService {
    /// Creates a budget after validating its fields against the existing
    /// definitions. A second budget for the same (category, period) pair
    /// is rejected, never merged.
    pub fn create(
        category: impl Into<String>,
        amount: f64,
        period: BudgetPeriod,
        existing: &[Budget],
    ) -> CoreResult<Budget> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(CoreError::Validation(
                "budget category must not be empty".into(),
            ));
        }
        if amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "budget amount must be positive, got {amount}"
            )));
        }
        if existing
            .iter()
            .any(|b| b.category == category && b.period == period)
        {
            tracing::warn!(%category, %period, "rejected duplicate budget");
            return Err(CoreError::Validation(format!(
                "a {period} budget for category {category} already exists"
            )));
        }
        let budget = Budget::new(category, amount, period);
        tracing::debug!(id = %budget.id, category = %budget.category, "budget created");
        Ok(budget)
    }

    /// Resolves the concrete calendar window the recurring period occupies
    /// around `reference`: the containing month, calendar-aligned quarter,
    /// or calendar year.
    pub fn period_window(period: BudgetPeriod, reference: NaiveDate) -> DateRange {
        let (start, end) = match period {
            BudgetPeriod::Monthly => (month_start(reference), month_end(reference)),
            BudgetPeriod::Quarterly => {
                let quarter_month = ((reference.month() - 1) / 3) * 3 + 1;
                let start = NaiveDate::from_ymd_opt(reference.year(), quarter_month, 1)
                    .unwrap_or(reference);
                (start, month_end(shift_month(start, 2)))
            }
            BudgetPeriod::Annual => {
                let start =
                    NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap_or(reference);
                let end =
                    NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(reference);
                (start, end)
            }
        };
        DateRange::from_ordered(start, end)
    }

    /// Derives the consumption status of one budget from a snapshot.
    ///
    /// `spent` sums Expense transactions in the budget's category whose
    /// date falls inside the period window containing `reference`.
    pub fn evaluate(
        budget: &Budget,
        snapshot: &[Transaction],
        reference: NaiveDate,
    ) -> BudgetStatus {
        let window = Self::period_window(budget.period, reference);
        let filter = TransactionFilter::new()
            .with_kind(TransactionKind::Expense)
            .with_category(budget.category.clone())
            .with_date_range(window);
        let spent: f64 = snapshot
            .iter()
            .filter(|txn| filter.matches(txn))
            .map(|txn| txn.amount)
            .sum();
        let state = if spent > budget.amount {
            BudgetState::OverBudget
        } else if spent == budget.amount {
            BudgetState::AtBudget
        } else {
            BudgetState::UnderBudget
        };
        BudgetStatus {
            budget_id: budget.id,
            category: budget.category.clone(),
            amount: budget.amount,
            spent,
            remaining: budget.amount - spent,
            state,
        }
    }

    /// Evaluates every budget, optionally restricted to one period, in
    /// definition order. Backs the period tabs of the budgeting view.
    pub fn evaluate_all(
        budgets: &[Budget],
        snapshot: &[Transaction],
        period: Option<BudgetPeriod>,
        reference: NaiveDate,
    ) -> Vec<BudgetStatus> {
        budgets
            .iter()
            .filter(|b| period.map_or(true, |p| b.period == p))
            .map(|b| Self::evaluate(b, snapshot, reference))
            .collect()
    }

    /// Evaluates a single budget by id.
    pub fn evaluate_by_id(
        id: Uuid,
        budgets: &[Budget],
        snapshot: &[Transaction],
        reference: NaiveDate,
    ) -> CoreResult<BudgetStatus> {
        let budget = budgets
            .iter()
            .find(|b| b.id == id)
            .ok_or(CoreError::BudgetNotFound(id))?;
        Ok(Self::evaluate(budget, snapshot, reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(category: &str, amount: f64, on: NaiveDate) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            description: category.to_string(),
            amount,
            kind: TransactionKind::Expense,
            category: category.into(),
            date: on,
        }
    }

    #[test]
    fn create_rejects_invalid_definitions() {
        assert!(matches!(
            BudgetService::create("", 100.0, BudgetPeriod::Monthly, &[]),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            BudgetService::create("Food", 0.0, BudgetPeriod::Monthly, &[]),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            BudgetService::create("Food", -10.0, BudgetPeriod::Monthly, &[]),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn create_rejects_duplicate_category_period_pairs() {
        let existing = BudgetService::create("Food", 100.0, BudgetPeriod::Monthly, &[]).unwrap();
        let result =
            BudgetService::create("Food", 250.0, BudgetPeriod::Monthly, &[existing.clone()]);
        assert!(matches!(result, Err(CoreError::Validation(_))));

        // A different period for the same category is a distinct budget.
        let quarterly =
            BudgetService::create("Food", 250.0, BudgetPeriod::Quarterly, &[existing]);
        assert!(quarterly.is_ok());
    }

    #[test]
    fn period_windows_align_to_the_calendar() {
        let reference = date(2023, 5, 17);
        assert_eq!(
            BudgetService::period_window(BudgetPeriod::Monthly, reference),
            DateRange::new(date(2023, 5, 1), date(2023, 5, 31)).unwrap()
        );
        assert_eq!(
            BudgetService::period_window(BudgetPeriod::Quarterly, reference),
            DateRange::new(date(2023, 4, 1), date(2023, 6, 30)).unwrap()
        );
        assert_eq!(
            BudgetService::period_window(BudgetPeriod::Annual, reference),
            DateRange::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap()
        );
    }

    #[test]
    fn quarter_windows_cover_every_month() {
        for month in 1..=12 {
            let window =
                BudgetService::period_window(BudgetPeriod::Quarterly, date(2023, month, 15));
            assert!(window.contains(date(2023, month, 15)));
            assert_eq!(window.months_spanned(), 3);
        }
    }

    #[test]
    fn evaluate_reports_over_budget_food_scenario() {
        let budget = BudgetService::create("Food", 100.0, BudgetPeriod::Monthly, &[]).unwrap();
        let snapshot = vec![expense("Food", 150.0, date(2023, 6, 5))];

        let status = BudgetService::evaluate(&budget, &snapshot, date(2023, 6, 15));
        assert_eq!(status.spent, 150.0);
        assert_eq!(status.remaining, -50.0);
        assert_eq!(status.state, BudgetState::OverBudget);
    }

    #[test]
    fn evaluate_distinguishes_at_budget_from_under() {
        let budget = BudgetService::create("Food", 150.0, BudgetPeriod::Monthly, &[]).unwrap();
        let snapshot = vec![expense("Food", 150.0, date(2023, 6, 5))];
        let status = BudgetService::evaluate(&budget, &snapshot, date(2023, 6, 15));
        assert_eq!(status.state, BudgetState::AtBudget);
        assert_eq!(status.remaining, 0.0);

        let status = BudgetService::evaluate(&budget, &[], date(2023, 6, 15));
        assert_eq!(status.state, BudgetState::UnderBudget);
        assert_eq!(status.spent, 0.0);
    }

    #[test]
    fn evaluate_ignores_other_periods_and_categories() {
        let budget = BudgetService::create("Food", 100.0, BudgetPeriod::Monthly, &[]).unwrap();
        let snapshot = vec![
            expense("Food", 90.0, date(2023, 5, 28)),
            expense("Housing", 800.0, date(2023, 6, 3)),
            expense("Food", 40.0, date(2023, 6, 5)),
        ];
        let status = BudgetService::evaluate(&budget, &snapshot, date(2023, 6, 15));
        assert_eq!(status.spent, 40.0);
        assert_eq!(status.state, BudgetState::UnderBudget);
    }

    #[test]
    fn appending_expenses_never_decreases_spent() {
        let budget = BudgetService::create("Food", 100.0, BudgetPeriod::Monthly, &[]).unwrap();
        let reference = date(2023, 6, 15);
        let mut snapshot = vec![expense("Food", 60.0, date(2023, 6, 2))];
        let before = BudgetService::evaluate(&budget, &snapshot, reference);

        snapshot.push(expense("Food", 55.0, date(2023, 6, 20)));
        let after = BudgetService::evaluate(&budget, &snapshot, reference);

        assert!(after.spent >= before.spent);
        assert_eq!(after.state, BudgetState::OverBudget);
    }

    #[test]
    fn evaluate_all_filters_by_period() {
        let monthly = BudgetService::create("Food", 100.0, BudgetPeriod::Monthly, &[]).unwrap();
        let annual = BudgetService::create("Travel", 2000.0, BudgetPeriod::Annual, &[]).unwrap();
        let budgets = vec![monthly, annual];

        let all = BudgetService::evaluate_all(&budgets, &[], None, date(2023, 6, 15));
        assert_eq!(all.len(), 2);

        let monthly_only = BudgetService::evaluate_all(
            &budgets,
            &[],
            Some(BudgetPeriod::Monthly),
            date(2023, 6, 15),
        );
        assert_eq!(monthly_only.len(), 1);
        assert_eq!(monthly_only[0].category, "Food");
    }

    #[test]
    fn evaluate_by_id_reports_missing_budgets() {
        let budget = BudgetService::create("Food", 100.0, BudgetPeriod::Monthly, &[]).unwrap();
        let missing = Uuid::new_v4();
        let result = BudgetService::evaluate_by_id(missing, &[budget], &[], date(2023, 6, 15));
        assert_eq!(result, Err(CoreError::BudgetNotFound(missing)));
    }
}
