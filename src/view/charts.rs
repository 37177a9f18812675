//! Chart series - computed data shaped for the external charting sink.
//!
//! The sink is opaque: these structs carry labels, values, and colors and
//! nothing else. Colors are the fixed hex palette the dashboards were styled
//! with.

use crate::core::budget::BudgetRow;
use crate::core::category::CategoryTotal;
use crate::core::series::MonthlyPoint;
use crate::records::Category;
use crate::view::format::category_label;

/// Short month labels indexed by 0-based month.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Color of the "No Data" doughnut slice.
pub const NO_DATA_COLOR: &str = "#cbd5e1";

const POSITIVE_FILL: &str = "rgba(6, 214, 160, 0.7)";
const POSITIVE_BORDER: &str = "#06d6a0";
const NEGATIVE_FILL: &str = "rgba(239, 68, 68, 0.7)";
const NEGATIVE_BORDER: &str = "#ef4444";

/// Hex color for a category slice.
#[must_use]
pub const fn category_color(category: Category) -> &'static str {
    match category {
        Category::Food | Category::Salary => "#10b981",
        Category::Transport | Category::Freelance => "#f59e0b",
        Category::Shopping | Category::Investment => "#8b5cf6",
        Category::Entertainment | Category::Business => "#ec4899",
        Category::Bills => "#3b82f6",
        Category::Health => "#ef4444",
        Category::Education => "#06b6d4",
        Category::Other => "#6b7280",
    }
}

/// Income and expense lines over the trailing months.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    /// Short month labels, oldest first
    pub labels: Vec<&'static str>,
    /// Income magnitude per month
    pub income: Vec<f64>,
    /// Expense magnitude per month
    pub expense: Vec<f64>,
}

/// Builds the income/expense line chart from the trailing-months buckets.
#[must_use]
pub fn income_expense_series(points: &[MonthlyPoint]) -> LineSeries {
    LineSeries {
        labels: points
            .iter()
            .map(|p| MONTH_LABELS[(p.month - 1) as usize])
            .collect(),
        income: points.iter().map(|p| p.income).collect(),
        expense: points.iter().map(|p| p.expense).collect(),
    }
}

/// Net balance bars over the trailing months, colored by sign.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    /// Short month labels, oldest first
    pub labels: Vec<&'static str>,
    /// Net signed balance per month
    pub values: Vec<f64>,
    /// Bar fill per month
    pub fill_colors: Vec<&'static str>,
    /// Bar border per month
    pub border_colors: Vec<&'static str>,
}

/// Builds the monthly balance bar chart from the trailing-months buckets.
#[must_use]
pub fn monthly_balance_series(points: &[MonthlyPoint]) -> BarSeries {
    BarSeries {
        labels: points
            .iter()
            .map(|p| MONTH_LABELS[(p.month - 1) as usize])
            .collect(),
        values: points.iter().map(|p| p.net).collect(),
        fill_colors: points
            .iter()
            .map(|p| if p.net >= 0.0 { POSITIVE_FILL } else { NEGATIVE_FILL })
            .collect(),
        border_colors: points
            .iter()
            .map(|p| if p.net >= 0.0 { POSITIVE_BORDER } else { NEGATIVE_BORDER })
            .collect(),
    }
}

/// Category doughnut: labels, values, and slice colors.
#[derive(Clone, Debug, PartialEq)]
pub struct DoughnutSeries {
    /// Display labels, largest total first
    pub labels: Vec<String>,
    /// Magnitude totals
    pub values: Vec<f64>,
    /// Slice colors
    pub colors: Vec<&'static str>,
}

/// Builds the category doughnut. An empty breakdown becomes a single
/// synthetic `No Data` slice of value 1 so the sink never receives an empty
/// series.
#[must_use]
pub fn category_doughnut(totals: &[CategoryTotal]) -> DoughnutSeries {
    if totals.is_empty() {
        return DoughnutSeries {
            labels: vec!["No Data".to_string()],
            values: vec![1.0],
            colors: vec![NO_DATA_COLOR],
        };
    }

    DoughnutSeries {
        labels: totals
            .iter()
            .map(|t| category_label(t.category).to_string())
            .collect(),
        values: totals.iter().map(|t| t.total).collect(),
        colors: totals.iter().map(|t| category_color(t.category)).collect(),
    }
}

/// Budget vs actual radar: one spoke per budgeted category.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarSeries {
    /// Category display labels, budget-table order
    pub labels: Vec<String>,
    /// Budgeted figure per spoke
    pub budgeted: Vec<f64>,
    /// Actual spending per spoke
    pub actual: Vec<f64>,
}

/// Builds the budget radar from the comparison rows.
#[must_use]
pub fn budget_radar(rows: &[BudgetRow]) -> RadarSeries {
    RadarSeries {
        labels: rows
            .iter()
            .map(|r| category_label(r.category).to_string())
            .collect(),
        budgeted: rows.iter().map(|r| r.budgeted).collect(),
        actual: rows.iter().map(|r| r.actual).collect(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::config::budgets::default_budgets;
    use crate::core::budget::budget_vs_actual;
    use crate::core::category::category_totals;
    use crate::core::series::trailing_months;
    use crate::records::TransactionKind;
    use crate::test_utils::tx;
    use chrono::NaiveDate;

    #[test]
    fn test_line_and_bar_series_from_buckets() {
        let reference = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let txs = vec![
            tx("1", "Salary", 50000.0, TransactionKind::Income, Category::Salary, reference),
            tx(
                "2",
                "Rent",
                -15000.0,
                TransactionKind::Expense,
                Category::Bills,
                NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            ),
        ];

        let points = trailing_months(&txs, reference);
        let line = income_expense_series(&points);
        assert_eq!(line.labels, vec!["Mar", "Apr", "May", "Jun", "Jul", "Aug"]);
        assert_eq!(line.income[5], 50000.0);
        assert_eq!(line.expense[4], 15000.0);

        let bars = monthly_balance_series(&points);
        assert_eq!(bars.values[4], -15000.0);
        assert_eq!(bars.fill_colors[4], NEGATIVE_FILL);
        assert_eq!(bars.values[5], 50000.0);
        assert_eq!(bars.border_colors[5], POSITIVE_BORDER);
    }

    #[test]
    fn test_doughnut_empty_becomes_no_data_slice() {
        let series = category_doughnut(&category_totals(&[]));
        assert_eq!(series.labels, vec!["No Data".to_string()]);
        assert_eq!(series.values, vec![1.0]);
        assert_eq!(series.colors, vec![NO_DATA_COLOR]);
    }

    #[test]
    fn test_doughnut_labels_and_colors() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let txs = vec![
            tx("1", "Groceries", -2500.0, TransactionKind::Expense, Category::Food, date),
            tx("2", "Petrol", -1200.0, TransactionKind::Expense, Category::Transport, date),
        ];

        let series = category_doughnut(&category_totals(&txs));
        assert_eq!(series.labels[0], "Food & Dining");
        assert_eq!(series.colors[0], "#10b981");
        assert_eq!(series.values, vec![2500.0, 1200.0]);
    }

    #[test]
    fn test_radar_follows_budget_table_order() {
        let rows = budget_vs_actual(&[], &default_budgets());
        let radar = budget_radar(&rows);
        assert_eq!(radar.labels[0], "Food & Dining");
        assert_eq!(radar.budgeted, vec![8000.0, 6000.0, 4000.0, 7000.0, 3000.0, 2000.0]);
        assert!(radar.actual.iter().all(|a| *a == 0.0));
    }
}
