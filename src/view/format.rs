//! Display formatting - INR currency, dates, relative ages, category labels.
//!
//! Currency strings use Indian digit grouping (last three digits, then pairs)
//! with no fraction digits, matching the `en-IN` output the stored
//! notification messages were written with.

use crate::records::{Category, TransactionKind};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Formats an amount as INR with Indian digit grouping, rounding to whole
/// rupees. Negative amounts carry a leading minus: `-₹2,500`.
#[must_use]
pub fn inr(amount: f64) -> String {
    let rounded = amount.round();
    // Cast safety: stored amounts are far below i64 range; fractional part
    // was just rounded away.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let magnitude = rounded.abs() as u64;

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(magnitude))
}

/// Signed display amount for a transaction row: `+₹2,500` for income,
/// `-₹2,500` for expense. The magnitude is always shown unsigned.
#[must_use]
pub fn signed_inr(kind: TransactionKind, magnitude: f64) -> String {
    let sign = match kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    format!("{sign}{}", inr(magnitude.abs()))
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts = vec![tail.to_string()];
    let mut rest = head;
    while rest.len() > 2 {
        let split = rest.len() - 2;
        parts.push(rest[split..].to_string());
        rest = &rest[..split];
    }
    if !rest.is_empty() {
        parts.push(rest.to_string());
    }
    parts.reverse();
    parts.join(",")
}

/// Formats a calendar date for list rows, e.g. `5 Aug 2026`.
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%b %Y"))
}

/// Relative age of a timestamp for the notification feed: `Just now`,
/// `5m ago`, `3h ago`, `2d ago`, or a short date once older than a week.
#[must_use]
pub fn relative_age(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        format!("{} {}", then.day(), then.format("%b"))
    }
}

/// Display name for a category.
#[must_use]
pub const fn category_label(category: Category) -> &'static str {
    match category {
        Category::Food => "Food & Dining",
        Category::Transport => "Transportation",
        Category::Shopping => "Shopping",
        Category::Entertainment => "Entertainment",
        Category::Bills => "Bills & Utilities",
        Category::Health => "Healthcare",
        Category::Education => "Education",
        Category::Salary => "Salary",
        Category::Freelance => "Freelance",
        Category::Investment => "Investment",
        Category::Business => "Business",
        Category::Other => "Other",
    }
}

/// Icon name for a category, from the icon set the renderer ships with.
#[must_use]
pub const fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Food => "fas fa-utensils",
        Category::Transport => "fas fa-car",
        Category::Shopping => "fas fa-shopping-bag",
        Category::Entertainment => "fas fa-film",
        Category::Bills => "fas fa-file-invoice-dollar",
        Category::Health => "fas fa-heartbeat",
        Category::Education => "fas fa-graduation-cap",
        Category::Salary => "fas fa-money-bill-wave",
        Category::Freelance => "fas fa-laptop-code",
        Category::Investment => "fas fa-chart-line",
        Category::Business => "fas fa-briefcase",
        Category::Other => "fas fa-circle",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_inr_indian_grouping() {
        assert_eq!(inr(0.0), "₹0");
        assert_eq!(inr(500.0), "₹500");
        assert_eq!(inr(2500.0), "₹2,500");
        assert_eq!(inr(50000.0), "₹50,000");
        assert_eq!(inr(123456.0), "₹1,23,456");
        assert_eq!(inr(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn test_inr_rounds_and_signs() {
        assert_eq!(inr(649.4), "₹649");
        assert_eq!(inr(649.5), "₹650");
        assert_eq!(inr(-2500.0), "-₹2,500");
    }

    #[test]
    fn test_signed_inr_uses_kind_not_sign() {
        // The magnitude is displayed unsigned either way
        assert_eq!(signed_inr(TransactionKind::Income, 50000.0), "+₹50,000");
        assert_eq!(signed_inr(TransactionKind::Expense, 2500.0), "-₹2,500");
        assert_eq!(signed_inr(TransactionKind::Expense, -2500.0), "-₹2,500");
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(display_date(date), "5 Aug 2026");
    }

    #[test]
    fn test_relative_age_buckets() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let minute = chrono::Duration::minutes(1);
        let hour = chrono::Duration::hours(1);
        let day = chrono::Duration::days(1);

        assert_eq!(relative_age(now, now), "Just now");
        assert_eq!(relative_age(now, now - minute * 5), "5m ago");
        assert_eq!(relative_age(now, now - hour * 3), "3h ago");
        assert_eq!(relative_age(now, now - day * 2), "2d ago");

        let old = now - day * 30;
        assert_eq!(relative_age(now, old), format!("{} {}", old.day(), old.format("%b")));
    }
}
