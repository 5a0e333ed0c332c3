//! Shared date utilities for budgeting windows and time-series buckets.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};

/// An inclusive calendar date window.
///
/// The fields stay private so `start <= end` holds for every value that
/// can exist; construction goes through [`DateRange::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds an inclusive range, rejecting inverted bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::Validation(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Internal constructor for bounds that are ordered by how they were
    /// derived (calendar windows and the like).
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar months touched by the range, inclusive.
    /// Always at least 1, since the bounds are ordered.
    pub fn months_spanned(&self) -> usize {
        (month_index(self.end) - month_index(self.start) + 1) as usize
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = CoreError;

    fn try_from(raw: RawDateRange) -> CoreResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Zero-based month counter since year 0, used for bucket arithmetic.
pub(crate) fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month() as i32 - 1
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    shift_month(first, 1) - Duration::days(1)
}

/// Moves `date` by whole months, clamping the day to the target month.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let mut day = date.day();
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap_or(date))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        let result = DateRange::new(date(2023, 6, 30), date(2023, 6, 1));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn deserialization_enforces_ordered_bounds() {
        let inverted = r#"{"start":"2023-06-01","end":"2023-01-01"}"#;
        assert!(serde_json::from_str::<DateRange>(inverted).is_err());

        let ordered = r#"{"start":"2023-01-01","end":"2023-06-01"}"#;
        let range: DateRange = serde_json::from_str(ordered).expect("deserialize");
        assert_eq!(range.start(), date(2023, 1, 1));
        assert_eq!(range.end(), date(2023, 6, 1));
    }

    #[test]
    fn months_spanned_is_never_zero() {
        let range = DateRange::new(date(2023, 6, 5), date(2023, 6, 5)).unwrap();
        assert_eq!(range.months_spanned(), 1);
    }

    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let range = DateRange::new(date(2023, 6, 1), date(2023, 6, 30)).unwrap();
        assert!(range.contains(date(2023, 6, 1)));
        assert!(range.contains(date(2023, 6, 30)));
        assert!(!range.contains(date(2023, 7, 1)));
    }

    #[test]
    fn months_spanned_counts_partial_months() {
        let range = DateRange::new(date(2023, 1, 15), date(2023, 6, 2)).unwrap();
        assert_eq!(range.months_spanned(), 6);
        let single = DateRange::new(date(2023, 6, 1), date(2023, 6, 30)).unwrap();
        assert_eq!(single.months_spanned(), 1);
    }

    #[test]
    fn months_spanned_crosses_year_boundary() {
        let range = DateRange::new(date(2022, 11, 1), date(2023, 2, 28)).unwrap();
        assert_eq!(range.months_spanned(), 4);
    }

    #[test]
    fn shift_month_clamps_day() {
        assert_eq!(shift_month(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(shift_month(date(2023, 3, 15), -3), date(2022, 12, 15));
    }

    #[test]
    fn month_end_handles_leap_years() {
        assert_eq!(month_end(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(month_end(date(2023, 2, 10)), date(2023, 2, 28));
    }
}
