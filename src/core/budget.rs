//! Budget comparison - fixed per-category figures vs actual spending.
//!
//! Pairs the configured budget table against all-time expense sums per
//! category. The comparison is not period-limited.

use crate::config::budgets::CategoryBudget;
use crate::core::category::expense_total;
use crate::records::{Category, Transaction};

/// One category's budgeted figure next to its actual spending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetRow {
    /// The category
    pub category: Category,
    /// Configured budget figure
    pub budgeted: f64,
    /// All-time expense sum for the category
    pub actual: f64,
}

/// Pairs each configured budget against actual spending, in table order.
#[must_use]
pub fn budget_vs_actual(transactions: &[Transaction], budgets: &[CategoryBudget]) -> Vec<BudgetRow> {
    budgets
        .iter()
        .map(|budget| BudgetRow {
            category: budget.category,
            budgeted: budget.amount,
            actual: expense_total(transactions, budget.category),
        })
        .collect()
}
