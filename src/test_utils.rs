//! Shared test utilities for `MoneyBoard`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::errors::Result;
use crate::records::{
    AuthorSnapshot, Category, Feedback, Transaction, TransactionKind, User,
};
use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with the key-value table
/// initialized. This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Fixed reference date shared by tests that don't care about the calendar.
#[must_use]
pub fn ref_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid date")
}

/// Builds a transaction with an explicit signed amount and date.
#[must_use]
pub fn tx(
    id: &str,
    description: &str,
    amount: f64,
    kind: TransactionKind,
    category: Category,
    date: NaiveDate,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: description.to_string(),
        amount,
        kind,
        category,
        date,
        timestamp: Utc::now(),
    }
}

/// Builds an income transaction on the reference date.
///
/// # Defaults
/// * `category`: [`Category::Salary`]
/// * `date`: [`ref_date`]
#[must_use]
pub fn sample_income(id: &str, description: &str, magnitude: f64) -> Transaction {
    tx(
        id,
        description,
        magnitude.abs(),
        TransactionKind::Income,
        Category::Salary,
        ref_date(),
    )
}

/// Builds an expense transaction on the reference date.
///
/// # Defaults
/// * `category`: [`Category::Food`]
/// * `date`: [`ref_date`]
#[must_use]
pub fn sample_expense(id: &str, description: &str, magnitude: f64) -> Transaction {
    tx(
        id,
        description,
        -magnitude.abs(),
        TransactionKind::Expense,
        Category::Food,
        ref_date(),
    )
}

/// Builds a user with derived email and a fixed password.
///
/// # Defaults
/// * `email`: `{username}@example.com`
/// * `password`: `"secret"`
#[must_use]
pub fn sample_user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "secret".to_string(),
        avatar: None,
        accent_color: "#6366f1".to_string(),
        background: "default".to_string(),
        mode: "light".to_string(),
        joined: Utc::now(),
    }
}

/// Builds a feedback post authored by the given user, with no likes or
/// replies.
#[must_use]
pub fn sample_feedback(id: &str, author: &User, rating: u8) -> Feedback {
    Feedback {
        id: id.to_string(),
        title: format!("Feedback {id}"),
        description: format!("Description for feedback {id}"),
        rating,
        screenshot: None,
        author: AuthorSnapshot::of(author),
        likes: Vec::new(),
        replies: Vec::new(),
        timestamp: Utc::now(),
    }
}
