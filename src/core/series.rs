//! Time-bucketed series - the trailing six calendar months.
//!
//! Buckets are derived from a bare month index, `(current - i + 12) % 12`,
//! and the year filter uses the reference year for every bucket. A window
//! that crosses a year boundary therefore matches the reference year's
//! same-numbered months, which is the behavior the stored dashboards were
//! built against; see DESIGN.md.

use crate::records::Transaction;
use chrono::{Datelike, NaiveDate};

/// Number of months in the trailing window.
pub const TRAILING_MONTHS: usize = 6;

/// Aggregates for one month bucket of the trailing window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyPoint {
    /// Year the bucket was filtered against (always the reference year)
    pub year: i32,
    /// 1-based calendar month of the bucket
    pub month: u32,
    /// Sum of income magnitudes
    pub income: f64,
    /// Sum of expense magnitudes
    pub expense: f64,
    /// Sum of signed amounts; differs from `income - expense` only when a
    /// stored record's sign disagrees with its kind, which the engine
    /// cannot detect
    pub net: f64,
}

/// Buckets the trailing [`TRAILING_MONTHS`] months ending at `reference`.
///
/// The oldest bucket comes first and the reference month last.
#[must_use]
pub fn trailing_months(transactions: &[Transaction], reference: NaiveDate) -> Vec<MonthlyPoint> {
    let year = reference.year();
    let mut points = Vec::with_capacity(TRAILING_MONTHS);

    for i in (0..TRAILING_MONTHS).rev() {
        #[allow(clippy::cast_possible_truncation)]
        let month0 = (reference.month0() + 12 - i as u32) % 12;
        let month = month0 + 1;

        let mut income = 0.0;
        let mut expense = 0.0;
        let mut net = 0.0;

        for tx in transactions {
            if tx.date.month() != month || tx.date.year() != year {
                continue;
            }
            if tx.is_income() {
                income += tx.magnitude();
            } else {
                expense += tx.magnitude();
            }
            net += tx.amount;
        }

        points.push(MonthlyPoint {
            year,
            month,
            income,
            expense,
            net,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::records::{Category, TransactionKind};
    use crate::test_utils::tx;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_window_covers_six_months_oldest_first() {
        let points = trailing_months(&[], d(2026, 8, 5));
        let months: Vec<u32> = points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_per_month_sums_and_net() {
        let txs = vec![
            tx("1", "Salary", 50000.0, TransactionKind::Income, Category::Salary, d(2026, 7, 1)),
            tx("2", "Rent", -15000.0, TransactionKind::Expense, Category::Bills, d(2026, 7, 3)),
            tx("3", "Freelance", 8000.0, TransactionKind::Income, Category::Freelance, d(2026, 8, 2)),
        ];

        let points = trailing_months(&txs, d(2026, 8, 5));

        let july = points.iter().find(|p| p.month == 7).unwrap();
        assert_eq!(july.income, 50000.0);
        assert_eq!(july.expense, 15000.0);
        assert_eq!(july.net, 35000.0);

        let august = points.iter().find(|p| p.month == 8).unwrap();
        assert_eq!(august.income, 8000.0);
        assert_eq!(august.expense, 0.0);
        assert_eq!(august.net, 8000.0);
    }

    #[test]
    fn test_year_boundary_window_matches_reference_year_only() {
        // Window for Feb 2026 spans Sep..Feb by month index. A September
        // transaction from 2025 is skipped; one from 2026 (same year, later
        // in the calendar) lands in the Sep bucket.
        let txs = vec![
            tx("1", "Old Sep", -100.0, TransactionKind::Expense, Category::Food, d(2025, 9, 15)),
            tx("2", "New Sep", -250.0, TransactionKind::Expense, Category::Food, d(2026, 9, 15)),
        ];

        let points = trailing_months(&txs, d(2026, 2, 10));
        let september = points.iter().find(|p| p.month == 9).unwrap();
        assert_eq!(september.expense, 250.0);
        assert_eq!(september.year, 2026);
    }
}
