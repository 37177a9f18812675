//! Period aggregation - current vs previous calendar month.
//!
//! Partitions transactions by calendar month and year of their `date` and
//! derives the four summary metrics plus their month-over-month percentage
//! changes. The zero-previous edge policy is part of the observable contract:
//! a metric growing from zero reads as +100%, and two zero months read as 0%.

use crate::errors::Result;
use crate::records::Transaction;
use crate::store::{StoreKey, blob};
use chrono::Datelike;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

/// Share of income counted toward the savings heuristic.
pub const SAVINGS_INCOME_RATE: f64 = 0.2;
/// Share of expenses deducted by the savings heuristic.
pub const SAVINGS_EXPENSE_RATE: f64 = 0.1;

/// Totals for one calendar month. Also the serialized shape of the
/// `previousMonthData` slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Sum of income magnitudes
    pub income: f64,
    /// Sum of expense magnitudes
    pub expense: f64,
    /// `income - expense`
    pub balance: f64,
    /// `max(0, income * 0.2 - expense * 0.1)`, a fixed heuristic
    pub savings: f64,
}

/// A month's totals next to the preceding month's, with percentage changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodComparison {
    /// Totals for the reference month
    pub current: PeriodTotals,
    /// Totals for the immediately preceding month
    pub previous: PeriodTotals,
    /// Month-over-month change of income, percent
    pub income_change: f64,
    /// Month-over-month change of expense, percent
    pub expense_change: f64,
    /// Month-over-month change of balance, percent
    pub balance_change: f64,
    /// Month-over-month change of savings, percent
    pub savings_change: f64,
}

/// Sums a month's transactions into [`PeriodTotals`].
///
/// `month` is 1-based. Records outside the month contribute nothing;
/// malformed amounts contribute their (zero-defaulted) stored value.
#[must_use]
pub fn month_totals(transactions: &[Transaction], year: i32, month: u32) -> PeriodTotals {
    let mut income = 0.0;
    let mut expense = 0.0;

    for tx in transactions {
        if tx.date.year() != year || tx.date.month() != month {
            continue;
        }
        if tx.is_income() {
            income += tx.magnitude();
        } else {
            expense += tx.magnitude();
        }
    }

    PeriodTotals {
        income,
        expense,
        balance: income - expense,
        savings: (income * SAVINGS_INCOME_RATE - expense * SAVINGS_EXPENSE_RATE).max(0.0),
    }
}

/// The calendar month immediately before the given one.
#[must_use]
pub const fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Percentage change from `previous` to `current`.
///
/// Edge policy: previous of zero reads as +100% when the metric appeared,
/// and 0% when both are zero.
#[must_use]
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        if current == 0.0 { 0.0 } else { 100.0 }
    } else {
        (current - previous) / previous.abs() * 100.0
    }
}

/// Aggregates the reference month and its predecessor, with deltas.
#[must_use]
pub fn compare_with_previous(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> PeriodComparison {
    let current = month_totals(transactions, year, month);
    let (prev_year, prev_month) = previous_month(year, month);
    let previous = month_totals(transactions, prev_year, prev_month);

    PeriodComparison {
        current,
        previous,
        income_change: percent_change(previous.income, current.income),
        expense_change: percent_change(previous.expense, current.expense),
        balance_change: percent_change(previous.balance, current.balance),
        savings_change: percent_change(previous.savings, current.savings),
    }
}

/// Computes the totals of the month preceding the reference month and
/// persists them under the `previousMonthData` slot.
pub async fn snapshot_previous_month<C>(
    db: &C,
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Result<PeriodTotals>
where
    C: ConnectionTrait,
{
    let (prev_year, prev_month) = previous_month(year, month);
    let totals = month_totals(transactions, prev_year, prev_month);
    blob::save_slot(db, StoreKey::PreviousMonthData, &totals).await?;
    Ok(totals)
}

/// Loads the persisted previous-month snapshot, if one was ever written.
pub async fn load_previous_snapshot<C>(db: &C) -> Result<Option<PeriodTotals>>
where
    C: ConnectionTrait,
{
    blob::load_slot(db, StoreKey::PreviousMonthData).await
}
