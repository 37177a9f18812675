//! Transaction recording - Handles all finance transaction mutations.
//!
//! Creating or deleting a transaction also emits a notification carrying a
//! snapshot of the transaction involved, so the feed stays consistent with
//! the log without a second bookkeeping pass. The canonical signed amount is
//! derived from the kind here and nowhere else.

use crate::errors::{Error, Result};
use crate::records::{
    Category, IdSource, Notification, NotificationKind, Transaction, TransactionKind,
};
use crate::store::RecordStore;
use crate::view::format::inr;
use chrono::{NaiveDate, Utc};
use sea_orm::ConnectionTrait;
use tracing::debug;

/// Form input for a new transaction. `amount` is the unsigned magnitude the
/// user typed; the stored sign is derived from `kind`.
#[derive(Clone, Debug)]
pub struct NewTransaction {
    /// Description text
    pub description: String,
    /// Unsigned amount
    pub amount: f64,
    /// Income or expense
    pub kind: TransactionKind,
    /// Category from the fixed set
    pub category: Category,
    /// Calendar date
    pub date: NaiveDate,
}

/// Validates the input, prepends the transaction to the log, and emits the
/// paired "added" notification.
///
/// # Errors
/// - [`Error::Validation`] when the description is empty
/// - [`Error::InvalidAmount`] when the amount is zero, negative, or not
///   finite
pub async fn record_transaction<C>(
    db: &C,
    transactions: &mut RecordStore<Transaction>,
    notifications: &mut RecordStore<Notification>,
    ids: &mut IdSource,
    input: NewTransaction,
) -> Result<Transaction>
where
    C: ConnectionTrait,
{
    let description = input.description.trim().to_string();
    if description.is_empty() {
        return Err(Error::Validation {
            message: "Please fill in all fields".to_string(),
        });
    }

    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(Error::InvalidAmount {
            amount: input.amount,
        });
    }

    let signed = match input.kind {
        TransactionKind::Income => input.amount,
        TransactionKind::Expense => -input.amount,
    };

    let transaction = Transaction {
        id: ids.next(),
        description,
        amount: signed,
        kind: input.kind,
        category: input.category,
        date: input.date,
        timestamp: Utc::now(),
    };

    transactions.insert(db, transaction.clone()).await?;
    debug!(id = %transaction.id, amount = signed, "recorded transaction");

    let (kind, label) = match input.kind {
        TransactionKind::Income => (NotificationKind::Income, "Income"),
        TransactionKind::Expense => (NotificationKind::Expense, "Expense"),
    };
    let notification = Notification {
        id: ids.next(),
        kind,
        title: format!("{label} Added"),
        message: format!(
            "{label} of {} added for {}",
            inr(input.amount),
            transaction.description
        ),
        transaction: Some(transaction.clone()),
        timestamp: Utc::now(),
        read: false,
    };
    notifications.insert(db, notification).await?;

    Ok(transaction)
}

/// Deletes a transaction by id and emits the deletion notification.
///
/// A missing id is a silent no-op: nothing is deleted, no notification is
/// emitted, and `Ok(None)` is returned.
pub async fn delete_transaction<C>(
    db: &C,
    transactions: &mut RecordStore<Transaction>,
    notifications: &mut RecordStore<Notification>,
    ids: &mut IdSource,
    transaction_id: &str,
) -> Result<Option<Transaction>>
where
    C: ConnectionTrait,
{
    let Some(removed) = transactions.delete_by_id(db, transaction_id).await? else {
        return Ok(None);
    };

    let label = if removed.is_income() { "Income" } else { "Expense" };
    let notification = Notification {
        id: ids.next(),
        kind: NotificationKind::Delete,
        title: "Transaction Deleted".to_string(),
        message: format!("{label} of {} deleted", inr(removed.magnitude())),
        transaction: Some(removed.clone()),
        timestamp: Utc::now(),
        read: false,
    };
    notifications.insert(db, notification).await?;

    Ok(Some(removed))
}

/// Attribute and text filter for the transactions list view.
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring match against the description
    pub search: String,
    /// Keep only this category when set
    pub category: Option<Category>,
    /// Keep only this kind when set
    pub kind: Option<TransactionKind>,
}

/// Applies the filter, preserving store order.
#[must_use]
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let needle = filter.search.to_lowercase();

    transactions
        .iter()
        .filter(|tx| {
            let matches_search =
                needle.is_empty() || tx.description.to_lowercase().contains(&needle);
            let matches_category = filter.category.is_none_or(|c| tx.category == c);
            let matches_kind = filter.kind.is_none_or(|k| tx.kind == k);
            matches_search && matches_category && matches_kind
        })
        .collect()
}

/// First-run sample data, written only when the log is empty. Returns
/// whether seeding happened.
pub async fn seed_sample_data<C>(
    db: &C,
    transactions: &mut RecordStore<Transaction>,
) -> Result<bool>
where
    C: ConnectionTrait,
{
    if !transactions.is_empty() {
        return Ok(false);
    }

    let now = Utc::now();
    let today = now.date_naive();
    let day = chrono::Duration::days(1);
    let half_day = chrono::Duration::hours(12);

    let samples = vec![
        Transaction {
            id: "1".to_string(),
            description: "Monthly Salary".to_string(),
            amount: 50000.0,
            kind: TransactionKind::Income,
            category: Category::Salary,
            date: today,
            timestamp: now - day,
        },
        Transaction {
            id: "2".to_string(),
            description: "Freelance Project".to_string(),
            amount: 15000.0,
            kind: TransactionKind::Income,
            category: Category::Freelance,
            date: today - day * 2,
            timestamp: now - day * 2,
        },
        Transaction {
            id: "3".to_string(),
            description: "Groceries".to_string(),
            amount: -2500.0,
            kind: TransactionKind::Expense,
            category: Category::Food,
            date: today,
            timestamp: now - half_day,
        },
        Transaction {
            id: "4".to_string(),
            description: "Netflix Subscription".to_string(),
            amount: -649.0,
            kind: TransactionKind::Expense,
            category: Category::Entertainment,
            date: today - day,
            timestamp: now - day,
        },
        Transaction {
            id: "5".to_string(),
            description: "Petrol".to_string(),
            amount: -1200.0,
            kind: TransactionKind::Expense,
            category: Category::Transport,
            date: today - day * 3,
            timestamp: now - day * 3,
        },
    ];

    transactions.replace_all(db, samples).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::store::{load_notifications, load_transactions};
    use crate::test_utils::setup_test_db;
    use chrono::NaiveDate;

    fn input(description: &str, amount: f64, kind: TransactionKind) -> NewTransaction {
        NewTransaction {
            description: description.to_string(),
            amount,
            kind,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_record_derives_sign_from_kind() -> Result<()> {
        let db = setup_test_db().await?;
        let mut transactions = load_transactions(&db).await?;
        let mut notifications = load_notifications(&db).await?;
        let mut ids = IdSource::new();

        let income = record_transaction(
            &db,
            &mut transactions,
            &mut notifications,
            &mut ids,
            input("Salary", 50000.0, TransactionKind::Income),
        )
        .await?;
        assert_eq!(income.amount, 50000.0);

        let expense = record_transaction(
            &db,
            &mut transactions,
            &mut notifications,
            &mut ids,
            input("Groceries", 2500.0, TransactionKind::Expense),
        )
        .await?;
        assert_eq!(expense.amount, -2500.0);
        assert_eq!(expense.magnitude(), 2500.0);

        // Newest first
        assert_eq!(transactions.all()[0].id, expense.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_record_emits_notification_with_snapshot() -> Result<()> {
        let db = setup_test_db().await?;
        let mut transactions = load_transactions(&db).await?;
        let mut notifications = load_notifications(&db).await?;
        let mut ids = IdSource::new();

        let tx = record_transaction(
            &db,
            &mut transactions,
            &mut notifications,
            &mut ids,
            input("Groceries", 2500.0, TransactionKind::Expense),
        )
        .await?;

        assert_eq!(notifications.len(), 1);
        let n = &notifications.all()[0];
        assert_eq!(n.kind, NotificationKind::Expense);
        assert_eq!(n.title, "Expense Added");
        assert_eq!(n.message, "Expense of ₹2,500 added for Groceries");
        assert_eq!(n.transaction.as_ref().unwrap().id, tx.id);
        assert!(!n.read);
        Ok(())
    }

    #[tokio::test]
    async fn test_validation_aborts_before_mutation() -> Result<()> {
        let db = setup_test_db().await?;
        let mut transactions = load_transactions(&db).await?;
        let mut notifications = load_notifications(&db).await?;
        let mut ids = IdSource::new();

        let blank = record_transaction(
            &db,
            &mut transactions,
            &mut notifications,
            &mut ids,
            input("   ", 100.0, TransactionKind::Expense),
        )
        .await;
        assert!(matches!(blank.unwrap_err(), Error::Validation { .. }));

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = record_transaction(
                &db,
                &mut transactions,
                &mut notifications,
                &mut ids,
                input("Valid description", bad, TransactionKind::Expense),
            )
            .await;
            assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));
        }

        assert!(transactions.is_empty());
        assert!(notifications.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_emits_delete_notification() -> Result<()> {
        let db = setup_test_db().await?;
        let mut transactions = load_transactions(&db).await?;
        let mut notifications = load_notifications(&db).await?;
        let mut ids = IdSource::new();

        let tx = record_transaction(
            &db,
            &mut transactions,
            &mut notifications,
            &mut ids,
            input("Groceries", 2500.0, TransactionKind::Expense),
        )
        .await?;

        let removed =
            delete_transaction(&db, &mut transactions, &mut notifications, &mut ids, &tx.id)
                .await?;
        assert_eq!(removed.unwrap().id, tx.id);
        assert!(transactions.is_empty());

        // Newest notification is the deletion
        let n = &notifications.all()[0];
        assert_eq!(n.kind, NotificationKind::Delete);
        assert_eq!(n.message, "Expense of ₹2,500 deleted");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_silent() -> Result<()> {
        let db = setup_test_db().await?;
        let mut transactions = load_transactions(&db).await?;
        let mut notifications = load_notifications(&db).await?;
        let mut ids = IdSource::new();

        let removed =
            delete_transaction(&db, &mut transactions, &mut notifications, &mut ids, "ghost")
                .await?;
        assert!(removed.is_none());
        assert!(notifications.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_filter_by_search_category_and_kind() -> Result<()> {
        let db = setup_test_db().await?;
        let mut transactions = load_transactions(&db).await?;
        seed_sample_data(&db, &mut transactions).await?;

        let all = filter_transactions(transactions.all(), &TransactionFilter::default());
        assert_eq!(all.len(), 5);

        let search = filter_transactions(
            transactions.all(),
            &TransactionFilter {
                search: "SALARY".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].description, "Monthly Salary");

        let food = filter_transactions(
            transactions.all(),
            &TransactionFilter {
                category: Some(Category::Food),
                ..Default::default()
            },
        );
        assert_eq!(food.len(), 1);

        let incomes = filter_transactions(
            transactions.all(),
            &TransactionFilter {
                kind: Some(TransactionKind::Income),
                ..Default::default()
            },
        );
        assert_eq!(incomes.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_only_when_empty() -> Result<()> {
        let db = setup_test_db().await?;
        let mut transactions = load_transactions(&db).await?;

        assert!(seed_sample_data(&db, &mut transactions).await?);
        assert_eq!(transactions.len(), 5);
        assert_eq!(transactions.all()[0].description, "Monthly Salary");

        // Second call is a no-op
        assert!(!seed_sample_data(&db, &mut transactions).await?);
        assert_eq!(transactions.len(), 5);
        Ok(())
    }
}
