//! Dashboard and analytics view models.
//!
//! Assembled fresh from the stores on every call; nothing here is cached.
//! The renderer receives formatted strings and enum directions only, never
//! raw floats it would have to format itself.

use crate::core::category::{CategoryTotal, spending_insights};
use crate::core::notification::unread_count;
use crate::core::period::{SAVINGS_EXPENSE_RATE, SAVINGS_INCOME_RATE, compare_with_previous};
use crate::records::{Notification, NotificationKind, Transaction, TransactionKind};
use crate::view::format::{category_icon, category_label, display_date, inr, relative_age, signed_inr};
use crate::view::trend::{TrendIndicator, trend_indicator};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// How many transactions the dashboard's recent list shows.
pub const RECENT_LIMIT: usize = 5;

/// Fixed savings goal for the analytics progress bar, in rupees.
pub const SAVINGS_GOAL: f64 = 10_000.0;

/// One summary card: formatted amount plus its trend.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCard {
    /// Formatted INR amount
    pub amount: String,
    /// Month-over-month trend
    pub trend: TrendIndicator,
}

/// One row in a transaction list.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    /// Id, for delete buttons
    pub id: String,
    /// Description text
    pub description: String,
    /// Formatted date
    pub date: String,
    /// Category display name
    pub category: String,
    /// Category icon name
    pub icon: &'static str,
    /// Signed display amount, `+₹…`/`-₹…`
    pub amount: String,
    /// Income or expense, for row styling
    pub kind: TransactionKind,
}

impl TransactionRow {
    fn of(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            description: tx.description.clone(),
            date: display_date(tx.date),
            category: category_label(tx.category).to_string(),
            icon: category_icon(tx.category),
            amount: signed_inr(tx.kind, tx.magnitude()),
            kind: tx.kind,
        }
    }
}

/// The dashboard page: four summary cards and the recent-transactions list.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    /// Monthly balance card
    pub balance: SummaryCard,
    /// Monthly income card
    pub income: SummaryCard,
    /// Monthly expense card
    pub expense: SummaryCard,
    /// Monthly savings card
    pub savings: SummaryCard,
    /// Top of the log in store order, at most [`RECENT_LIMIT`] rows
    pub recent: Vec<TransactionRow>,
}

/// Builds the dashboard for the month containing `today`.
#[must_use]
pub fn dashboard(transactions: &[Transaction], today: NaiveDate) -> DashboardView {
    let cmp = compare_with_previous(transactions, today.year(), today.month());

    let card = |amount: f64, change: f64| SummaryCard {
        amount: inr(amount),
        trend: trend_indicator(change, amount),
    };

    DashboardView {
        balance: card(cmp.current.balance, cmp.balance_change),
        income: card(cmp.current.income, cmp.income_change),
        expense: card(cmp.current.expense, cmp.expense_change),
        savings: card(cmp.current.savings, cmp.savings_change),
        recent: transactions
            .iter()
            .take(RECENT_LIMIT)
            .map(TransactionRow::of)
            .collect(),
    }
}

/// Maps a transaction slice (already filtered by the caller) to list rows.
#[must_use]
pub fn transaction_rows(transactions: &[&Transaction]) -> Vec<TransactionRow> {
    transactions.iter().map(|tx| TransactionRow::of(tx)).collect()
}

/// One row in the notification dropdown.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationRow {
    /// Id, for mark-as-read clicks
    pub id: String,
    /// Message text
    pub message: String,
    /// Relative age, e.g. `5m ago`
    pub age: String,
    /// Notification kind, for the icon
    pub kind: NotificationKind,
    /// Whether the row renders as read
    pub read: bool,
}

/// The notification dropdown: rows plus the bell badge count.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationView {
    /// Feed rows in store order (newest first)
    pub rows: Vec<NotificationRow>,
    /// Unread count for the badge
    pub unread: usize,
}

/// Builds the notification dropdown view.
#[must_use]
pub fn notification_view(notifications: &[Notification], now: DateTime<Utc>) -> NotificationView {
    NotificationView {
        rows: notifications
            .iter()
            .map(|n| NotificationRow {
                id: n.id.clone(),
                message: n.message.clone(),
                age: relative_age(now, n.timestamp),
                kind: n.kind,
                read: n.read,
            })
            .collect(),
        unread: unread_count(notifications),
    }
}

/// One spending-insight row.
#[derive(Clone, Debug, PartialEq)]
pub struct InsightRow {
    /// Category display name
    pub label: String,
    /// Formatted all-time expense total
    pub amount: String,
}

/// The analytics page: savings progress and the insights panel.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsView {
    /// Formatted all-time savings amount
    pub savings_amount: String,
    /// Progress toward [`SAVINGS_GOAL`], clamped to 100
    pub savings_percent: f64,
    /// Fixed-category spending rows
    pub insights: Vec<InsightRow>,
}

/// Builds the analytics view over the whole log (not period-limited).
#[must_use]
pub fn analytics(transactions: &[Transaction]) -> AnalyticsView {
    let income: f64 = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(Transaction::magnitude)
        .sum();
    let expense: f64 = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(Transaction::magnitude)
        .sum();

    let savings = (income * SAVINGS_INCOME_RATE - expense * SAVINGS_EXPENSE_RATE).max(0.0);
    let savings_percent = (savings / SAVINGS_GOAL * 100.0).min(100.0);

    AnalyticsView {
        savings_amount: inr(savings),
        savings_percent,
        insights: spending_insights(transactions)
            .iter()
            .map(|CategoryTotal { category, total }| InsightRow {
                label: category_label(*category).to_string(),
                amount: inr(*total),
            })
            .collect(),
    }
}
