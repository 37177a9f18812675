//! Transaction record - a single income or expense entry.
//!
//! The signed `amount` is the canonical value: positive for income, negative
//! for expense, derived from the kind at creation time. Every display or
//! aggregation that needs a magnitude goes through [`Transaction::magnitude`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a transaction adds or removes money.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in; `amount` is positive
    Income,
    /// Money going out; `amount` is negative
    Expense,
}

/// Fixed category set shared by both transaction kinds.
///
/// Stored as a lowercase string; unknown stored values collapse to
/// [`Category::Other`] rather than failing the whole collection load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Food & dining
    Food,
    /// Transportation
    Transport,
    /// Shopping
    Shopping,
    /// Entertainment
    Entertainment,
    /// Bills & utilities
    Bills,
    /// Healthcare
    Health,
    /// Education
    Education,
    /// Salary income
    Salary,
    /// Freelance income
    Freelance,
    /// Investment income
    Investment,
    /// Business income
    Business,
    /// Catch-all, also the landing spot for unknown stored values
    #[default]
    Other,
}

impl Category {
    /// The lowercase string this category is stored as.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Bills => "bills",
            Self::Health => "health",
            Self::Education => "education",
            Self::Salary => "salary",
            Self::Freelance => "freelance",
            Self::Investment => "investment",
            Self::Business => "business",
            Self::Other => "other",
        }
    }

    /// All categories, in stored-data order.
    #[must_use]
    pub const fn all() -> [Self; 12] {
        [
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Entertainment,
            Self::Bills,
            Self::Health,
            Self::Education,
            Self::Salary,
            Self::Freelance,
            Self::Investment,
            Self::Business,
            Self::Other,
        ]
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "shopping" => Self::Shopping,
            "entertainment" => Self::Entertainment,
            "bills" => Self::Bills,
            "health" => Self::Health,
            "education" => Self::Education,
            "salary" => Self::Salary,
            "freelance" => Self::Freelance,
            "investment" => Self::Investment,
            "business" => Self::Business,
            _ => Self::Other,
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

/// A single income or expense entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Generation-time string id
    pub id: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Signed amount; the sign always matches `kind`
    #[serde(default)]
    pub amount: f64,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category from the fixed set
    #[serde(default)]
    pub category: Category,
    /// Calendar date of the transaction (no time component)
    pub date: NaiveDate,
    /// Creation instant, used for recency ordering and notification age
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Unsigned amount for display and per-kind sums.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    /// True when the transaction is an income entry.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// True when the transaction is an expense entry.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl crate::records::Record for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}
