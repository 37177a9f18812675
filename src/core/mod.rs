//! Core business logic - framework-agnostic operations for both apps.
//!
//! Aggregation functions are pure and total: they never fail and never touch
//! the database, deriving their views from whatever record slice they are
//! given. Mutating operations take the affected stores by `&mut` and persist
//! through them before returning.

/// Login, signup, and remember-me handling
pub mod auth;
/// Feedback board queries: filter, sort, paginate
pub mod board;
/// Budget vs actual spending comparison
pub mod budget;
/// Category spending breakdown and insights
pub mod category;
/// Feedback mutations: post, edit, like, reply, author backfill
pub mod feedback;
/// Notification feed maintenance
pub mod notification;
/// Current vs previous month aggregation
pub mod period;
/// Trailing-months chart series
pub mod series;
/// Feedback export and import
pub mod transfer;
/// Finance transaction recording and filtering
pub mod transaction;
