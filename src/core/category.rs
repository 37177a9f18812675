//! Category aggregation - magnitude totals grouped by category.
//!
//! The breakdown spans the full record set (both kinds, not period-limited),
//! drops zero-total categories, and sorts descending by total. The spending
//! insights panel reads a fixed trio of expense categories.

use crate::records::{Category, Transaction};

/// Total magnitude for one category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryTotal {
    /// The category
    pub category: Category,
    /// Sum of magnitudes
    pub total: f64,
}

/// Categories shown on the spending insights panel, in panel order.
pub const INSIGHT_CATEGORIES: [Category; 3] =
    [Category::Food, Category::Shopping, Category::Transport];

/// Sums magnitudes per category across all transactions, excluding
/// zero-total categories, sorted descending by total.
///
/// Equal totals keep the fixed category-set order, so the result is
/// deterministic.
#[must_use]
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Category::all()
        .into_iter()
        .map(|category| CategoryTotal {
            category,
            total: transactions
                .iter()
                .filter(|tx| tx.category == category)
                .map(Transaction::magnitude)
                .sum(),
        })
        .filter(|entry| entry.total > 0.0)
        .collect();

    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// Sum of expense magnitudes for one category, across all transactions.
#[must_use]
pub fn expense_total(transactions: &[Transaction], category: Category) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.is_expense() && tx.category == category)
        .map(Transaction::magnitude)
        .sum()
}

/// Expense totals for the fixed insights trio, in panel order.
#[must_use]
pub fn spending_insights(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    INSIGHT_CATEGORIES
        .into_iter()
        .map(|category| CategoryTotal {
            category,
            total: expense_total(transactions, category),
        })
        .collect()
}
